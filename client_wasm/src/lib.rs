//! Browser host for the Pong core
//!
//! Supplies what the core treats as outside collaborators: keyboard state,
//! Canvas 2D sprite and text drawing, the texture store and a console logger.
//! Only the key mapping is built for non-wasm targets.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use client::PongClient;
