//! Browser entry point: wires the canvas, DOM events and the tick interval
//! around a [`Game`].

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{AssetId, Config, Game, GameMap};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, EventTarget, HtmlAudioElement, HtmlCanvasElement,
    HtmlImageElement, KeyboardEvent, MouseEvent, Window,
};

use crate::assets::{self, LoadCallbacks};
use crate::fsm::{LoopAction, LoopFsm, LoopState};
use crate::input;
use crate::renderer::CanvasRenderer;

/// State shared by the tick and the DOM callbacks
pub struct Session {
    pub game: Game,
    renderer: CanvasRenderer,
    paddle_sound: HtmlAudioElement,
    sound_id: AssetId,
    fsm: LoopFsm,
}

impl Session {
    fn on_tick(&mut self) {
        match self.fsm.state() {
            LoopState::Stopped => return,
            LoopState::Loading => {
                if !self.game.assets.is_complete() {
                    return;
                }
                self.transition(LoopAction::AssetsSettled);
                for asset in self.game.assets.failures() {
                    console_error!("Running without {:?} {}", asset.kind, asset.url);
                }
            }
            LoopState::Running => {}
        }

        if self.game.tick() {
            if self.game.events.ball_hit_paddle && self.game.assets.is_loaded(self.sound_id) {
                assets::play(&self.paddle_sound);
            }
            self.game.draw(&mut self.renderer);
        }
    }

    fn transition(&mut self, action: LoopAction) {
        let result = self.fsm.transition(action);
        if result.success {
            console_log!("Loop: {:?} -> {:?}", result.from_state, result.to_state);
        }
    }
}

/// DOM listener removed again when dropped
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            console_error!("Failed to remove {} listener: {:?}", self.kind, err);
        }
    }
}

/// Running game, returned to JavaScript by [`start`]
#[wasm_bindgen]
pub struct PongHandle {
    window: Window,
    session: Rc<RefCell<Session>>,
    interval: Option<i32>,
    tick: Option<Closure<dyn FnMut()>>,
    listeners: Vec<Listener>,
    loads: Vec<LoadCallbacks>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Stop the tick interval and detach every DOM callback. Safe to call twice.
    pub fn stop(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.tick = None;
        self.listeners.clear();
        self.loads.clear();

        let mut session = self.session.borrow_mut();
        if session.fsm.can_transition(LoopAction::Stop) {
            session.transition(LoopAction::Stop);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.session.borrow().game.score.current
    }

    #[wasm_bindgen(getter)]
    pub fn best(&self) -> u32 {
        self.session.borrow().game.score.best
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> LoopState {
        self.session.borrow().fsm.state()
    }
}

impl Drop for PongHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start a game on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<PongHandle, JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas with id '{canvas_id}'")))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .dyn_into()?;

    let map = GameMap::new(canvas.width() as f32, canvas.height() as f32);
    let mut game =
        Game::new(Config::new(), map).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let (image_id, sound_id) = assets::register(&mut game);
    let image_url = game.config.ball_image.clone();
    let sound_url = game.config.paddle_sound.clone();
    let interval_ms = game.config.tick_interval_ms();

    let ball_image = HtmlImageElement::new()?;
    let paddle_sound = HtmlAudioElement::new()?;

    console_log!(
        "Pong started on {}x{} canvas at {}ms per tick",
        map.width,
        map.height,
        interval_ms
    );

    let session = Rc::new(RefCell::new(Session {
        game,
        renderer: CanvasRenderer::new(ctx, ball_image.clone()),
        paddle_sound: paddle_sound.clone(),
        sound_id,
        fsm: LoopFsm::new(),
    }));

    let loads = vec![
        assets::load_image(&session, &ball_image, image_id, &image_url),
        assets::load_sound(&session, &paddle_sound, sound_id, &sound_url),
    ];

    let target: &EventTarget = document.as_ref();
    let key_down_session = session.clone();
    let key_up_session = session.clone();
    let mouse_session = session.clone();
    let listeners = vec![
        Listener::attach(target, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                input::handle_key_down(&mut key_down_session.borrow_mut().game.input, event);
            }
        })?,
        Listener::attach(target, "keyup", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                input::handle_key_up(&mut key_up_session.borrow_mut().game.input, event);
            }
        })?,
        Listener::attach(target, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                input::handle_mouse_move(&mut mouse_session.borrow_mut().game.input, event, &canvas);
            }
        })?,
    ];

    let tick_session = session.clone();
    let tick = Closure::<dyn FnMut()>::new(move || tick_session.borrow_mut().on_tick());
    let interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms as i32,
    )?;

    Ok(PongHandle {
        window,
        session,
        interval: Some(interval),
        tick: Some(tick),
        listeners,
        loads,
    })
}
