use game_core::{textures, Config, Game, Keys};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use crate::input::event_key_code;
use crate::renderer::{CanvasRenderer, TextureStore};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    crate::logger::init(log::LevelFilter::Info);
}

/// One local two-player match drawn onto a canvas.
///
/// JavaScript owns the animation loop: forward key events, then call
/// `frame(dt)` from `requestAnimationFrame`.
#[wasm_bindgen]
pub struct PongClient {
    game: Game,
    keys: Keys,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl PongClient {
    /// `asset_root` is the URL prefix textures are fetched from (`<root>/<name>.png`)
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, asset_root: &str, seed: u32) -> Result<PongClient, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element #{}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;

        let mut store = TextureStore::new();
        for name in textures::ALL {
            store.load(name, &format!("{}/{}.png", asset_root, name))?;
        }
        let renderer = CanvasRenderer::new(&canvas, store)?;

        let config = Config::with_screen(canvas.width() as f32, canvas.height() as f32);
        log::info!("Pong client ready on {}x{} canvas", canvas.width(), canvas.height());

        Ok(Self {
            game: Game::new(config, seed as u64),
            keys: Keys::new(),
            renderer,
        })
    }

    /// Returns true when the game uses the key (its default action is suppressed)
    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        self.set_key(event, true)
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
        self.set_key(event, false)
    }

    /// Drop all held keys, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        self.keys.release_all();
    }

    /// Simulate and draw one frame; `dt` in seconds
    pub fn frame(&mut self, dt: f32) {
        self.game.tick(dt, &self.keys, &mut self.renderer);
    }

    /// Current state as a string, for the page's own UI
    pub fn state_string(&self) -> String {
        format!("{:?}", self.game.state())
    }

    /// `[player 1, player 2]`
    pub fn scores(&self) -> Vec<u32> {
        vec![self.game.player1_score(), self.game.player2_score()]
    }
}

impl PongClient {
    fn set_key(&mut self, event: &KeyboardEvent, down: bool) -> bool {
        match event_key_code(event) {
            Some(code) => {
                event.prevent_default();
                self.keys.set(code, down);
                true
            }
            None => false,
        }
    }
}
