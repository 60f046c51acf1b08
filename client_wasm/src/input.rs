//! Keyboard input handling

use game_core::key;
use web_sys::KeyboardEvent;

/// Map a `KeyboardEvent.key` value to the game's key code
pub fn key_code(key_name: &str) -> Option<usize> {
    match key_name {
        "ArrowUp" | "Up" => Some(key::UP),
        "ArrowDown" | "Down" => Some(key::DOWN),
        "ArrowLeft" | "Left" => Some(key::LEFT),
        "ArrowRight" | "Right" => Some(key::RIGHT),
        "w" | "W" => Some(key::W),
        "s" | "S" => Some(key::S),
        " " | "Spacebar" => Some(key::SPACE),
        "Enter" => Some(key::ENTER),
        _ => None,
    }
}

/// Extract the game's key code from a keyboard event
pub fn event_key_code(event: &KeyboardEvent) -> Option<usize> {
    key_code(&event.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_letter_keys() {
        assert_eq!(key_code("ArrowUp"), Some(key::UP));
        assert_eq!(key_code("ArrowLeft"), Some(key::LEFT));
        assert_eq!(key_code("W"), Some(key::W));
        assert_eq!(key_code("s"), Some(key::S));
    }

    #[test]
    fn test_space_and_enter() {
        assert_eq!(key_code(" "), Some(key::SPACE));
        assert_eq!(key_code("Enter"), Some(key::ENTER));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(key_code("q"), None);
        assert_eq!(key_code("Escape"), None);
    }
}
