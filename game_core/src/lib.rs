//! Simulation core for a two-player Pong game
//!
//! Everything here is deterministic and renderer-agnostic: the host polls its
//! keyboard into [`Keys`], calls [`Game::tick`] once per frame with the frame
//! time, and receives draw calls through [`SpriteRenderer`] and
//! [`TextRenderer`].

pub mod collision;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod level;
pub mod params;
pub mod particles;
pub mod render;
pub mod resources;

pub use collision::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use level::*;
pub use params::*;
pub use particles::*;
pub use render::*;
pub use resources::*;
