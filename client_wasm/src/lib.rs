//! Browser client for single-player Pong
//!
//! Canvas 2D rendering, DOM input and a fixed-rate tick around `game_core`.
//! Only the DOM-facing modules need a wasm32 target.

pub mod fsm;
pub mod input;

#[cfg(target_arch = "wasm32")]
#[macro_use]
mod logging;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod assets;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::{start, PongHandle};
pub use fsm::{LoopAction, LoopFsm, LoopState};
