//! Narrow drawing interfaces the core calls into
//!
//! The host owns the GPU/canvas and the texture store; the core only names
//! textures by key.

use glam::{Vec2, Vec3, Vec4};

/// Draws one textured quad per call. `position` is the top-left corner,
/// `rotation` is in degrees about the quad's center.
pub trait SpriteRenderer {
    fn draw_sprite(&mut self, texture: &str, position: Vec2, size: Vec2, rotation: f32, color: Vec3);

    /// Translucent quad, used by particles
    fn draw_sprite_rgba(&mut self, texture: &str, position: Vec2, size: Vec2, color: Vec4) {
        self.draw_sprite(texture, position, size, 0.0, color.truncate());
    }
}

/// Draws a line of HUD text with its top-left at (x, y)
pub trait TextRenderer {
    fn render_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Vec3);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        texture: String,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Vec4,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        scale: f32,
        color: Vec3,
    },
}

/// Renderer that records calls in order instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn sprites<'a>(&'a self, texture: &'a str) -> impl Iterator<Item = &'a DrawCommand> + 'a {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Sprite { texture: t, .. } if t == texture))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite { .. } => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl SpriteRenderer for DrawList {
    fn draw_sprite(&mut self, texture: &str, position: Vec2, size: Vec2, rotation: f32, color: Vec3) {
        self.commands.push(DrawCommand::Sprite {
            texture: texture.to_string(),
            position,
            size,
            rotation,
            color: color.extend(1.0),
        });
    }

    fn draw_sprite_rgba(&mut self, texture: &str, position: Vec2, size: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Sprite {
            texture: texture.to_string(),
            position,
            size,
            rotation: 0.0,
            color,
        });
    }
}

impl TextRenderer for DrawList {
    fn render_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Vec3) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            scale,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.draw_sprite("ball", Vec2::ZERO, Vec2::ONE, 0.0, Vec3::ONE);
        list.render_text("Score", 5.0, 5.0, 1.0, Vec3::ONE);
        list.draw_sprite_rgba("particle", Vec2::ONE, Vec2::ONE, Vec4::new(1.0, 1.0, 1.0, 0.5));

        assert_eq!(list.commands.len(), 3);
        assert_eq!(list.sprites("ball").count(), 1);
        assert_eq!(list.sprites("particle").count(), 1);
        assert!(list.contains_text("Sco"));
        assert!(matches!(list.commands[1], DrawCommand::Text { .. }));

        list.clear();
        assert!(list.commands.is_empty());
    }
}
