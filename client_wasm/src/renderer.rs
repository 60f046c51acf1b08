//! Canvas 2D sprite and text drawing

use game_core::{SpriteRenderer, TextRenderer};
use glam::{Vec2, Vec3, Vec4};
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const BASE_FONT_PX: f32 = 24.0;

/// Textures by name. Filled once at start-up, read-only afterwards.
#[derive(Default)]
pub struct TextureStore {
    images: HashMap<String, HtmlImageElement>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `url`; the image can be drawn once the browser has it
    pub fn load(&mut self, name: &str, url: &str) -> Result<(), JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        self.images.insert(name.to_string(), image);
        Ok(())
    }

    /// A texture that has finished loading
    pub fn get(&self, name: &str) -> Option<&HtmlImageElement> {
        self.images
            .get(name)
            .filter(|image| image.complete() && image.natural_width() > 0)
    }
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    textures: TextureStore,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, textures: TextureStore) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, textures })
    }

    fn quad(&self, texture: &str, position: Vec2, size: Vec2, rotation: f32, color: Vec4) -> Result<(), JsValue> {
        self.ctx.save();
        let result = self.quad_transformed(texture, position, size, rotation, color);
        self.ctx.restore();
        result
    }

    fn quad_transformed(
        &self,
        texture: &str,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Vec4,
    ) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let center = position + size / 2.0;
        ctx.translate(center.x as f64, center.y as f64)?;
        ctx.rotate(rotation.to_radians() as f64)?;
        ctx.set_global_alpha(color.w.clamp(0.0, 1.0) as f64);

        let (x, y) = (-size.x as f64 / 2.0, -size.y as f64 / 2.0);
        let (w, h) = (size.x as f64, size.y as f64);
        match self.textures.get(texture) {
            Some(image) => ctx.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h)?,
            // Not loaded yet: draw a flat quad so the game stays playable
            None => {
                ctx.set_fill_style_str(&css_color(color.truncate()));
                ctx.fill_rect(x, y, w, h);
            }
        }
        Ok(())
    }
}

impl SpriteRenderer for CanvasRenderer {
    fn draw_sprite(&mut self, texture: &str, position: Vec2, size: Vec2, rotation: f32, color: Vec3) {
        if let Err(e) = self.quad(texture, position, size, rotation, color.extend(1.0)) {
            log::warn!("Failed to draw {}: {:?}", texture, e);
        }
    }

    fn draw_sprite_rgba(&mut self, texture: &str, position: Vec2, size: Vec2, color: Vec4) {
        if let Err(e) = self.quad(texture, position, size, 0.0, color) {
            log::warn!("Failed to draw {}: {:?}", texture, e);
        }
    }
}

impl TextRenderer for CanvasRenderer {
    fn render_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Vec3) {
        let ctx = &self.ctx;
        ctx.set_font(&format!("{}px monospace", (BASE_FONT_PX * scale).round()));
        ctx.set_text_baseline("top");
        ctx.set_fill_style_str(&css_color(color));
        if let Err(e) = ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Failed to draw text {:?}: {:?}", text, e);
        }
    }
}

fn css_color(color: Vec3) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({}, {}, {})",
        channel(color.x),
        channel(color.y),
        channel(color.z)
    )
}
