//! Image and sound loading
//!
//! Loads are started once at startup and settle through DOM callbacks into
//! the game's asset tracker. Failures are reported and the game runs without
//! the asset.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{AssetId, AssetKind, Game};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlElement, HtmlImageElement};

use crate::app::Session;

/// Keeps load callbacks alive until the element settles or the game stops
pub struct LoadCallbacks {
    element: HtmlElement,
    _on_ready: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl LoadCallbacks {
    /// Unhook the callbacks so the element can't call into dropped closures
    pub fn detach(&self) {
        self.element.set_onload(None);
        self.element.set_oncanplay(None);
        self.element.set_onerror(None);
    }
}

impl Drop for LoadCallbacks {
    fn drop(&mut self) {
        self.detach();
    }
}

fn callbacks(
    session: &Rc<RefCell<Session>>,
    id: AssetId,
    url: &str,
) -> (Closure<dyn FnMut()>, Closure<dyn FnMut()>) {
    let ready_session = session.clone();
    let ready_url = url.to_string();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if ready_session.borrow_mut().game.assets.mark_loaded(id) {
            console_log!("{} loaded", ready_url);
        }
    });

    let error_session = session.clone();
    let error_url = url.to_string();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        if error_session
            .borrow_mut()
            .game
            .assets
            .mark_failed(id, format!("could not load {error_url}"))
        {
            console_error!("ERROR: could not load {}", error_url);
        }
    });

    (on_ready, on_error)
}

/// Start loading an image; the tracker hears back through `onload`/`onerror`
pub fn load_image(
    session: &Rc<RefCell<Session>>,
    image: &HtmlImageElement,
    id: AssetId,
    url: &str,
) -> LoadCallbacks {
    let (on_ready, on_error) = callbacks(session, id, url);
    image.set_onload(Some(on_ready.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(url);

    LoadCallbacks {
        element: image.clone().unchecked_into(),
        _on_ready: on_ready,
        _on_error: on_error,
    }
}

/// Start loading a sound; ready once the browser can play it
pub fn load_sound(
    session: &Rc<RefCell<Session>>,
    sound: &HtmlAudioElement,
    id: AssetId,
    url: &str,
) -> LoadCallbacks {
    let (on_ready, on_error) = callbacks(session, id, url);
    sound.set_oncanplay(Some(on_ready.as_ref().unchecked_ref()));
    sound.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    sound.set_src(url);

    LoadCallbacks {
        element: sound.clone().unchecked_into(),
        _on_ready: on_ready,
        _on_error: on_error,
    }
}

/// Register both game assets with the tracker before any load starts
pub fn register(game: &mut Game) -> (AssetId, AssetId) {
    let image = game
        .assets
        .begin(AssetKind::Image, game.config.ball_image.clone());
    let sound = game
        .assets
        .begin(AssetKind::Sound, game.config.paddle_sound.clone());
    (image, sound)
}

/// Fire-and-forget playback. A rejected play (autoplay policy, decode
/// error) is logged and otherwise ignored.
pub fn play(sound: &HtmlAudioElement) {
    sound.set_current_time(0.0);
    match sound.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                console_error!("Sound play failed: {:?}", err);
            }
        }),
        Err(err) => console_error!("Sound play failed: {:?}", err),
    }
}
