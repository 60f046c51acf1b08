//! Key-state polling and rising-edge detection for game actions

/// Number of key codes the key-state array covers
pub const KEY_COUNT: usize = 1024;

/// Key codes, GLFW numbering
pub mod key {
    pub const SPACE: usize = 32;
    pub const D: usize = 68;
    pub const S: usize = 83;
    pub const W: usize = 87;
    pub const ENTER: usize = 257;
    pub const RIGHT: usize = 262;
    pub const LEFT: usize = 263;
    pub const DOWN: usize = 264;
    pub const UP: usize = 265;
}

/// Raw key-state array filled by the host's window/input system
#[derive(Clone)]
pub struct Keys {
    down: [bool; KEY_COUNT],
}

impl Keys {
    pub fn new() -> Self {
        Self {
            down: [false; KEY_COUNT],
        }
    }

    pub fn press(&mut self, code: usize) {
        if let Some(slot) = self.down.get_mut(code) {
            *slot = true;
        }
    }

    pub fn release(&mut self, code: usize) {
        if let Some(slot) = self.down.get_mut(code) {
            *slot = false;
        }
    }

    pub fn set(&mut self, code: usize, down: bool) {
        if down {
            self.press(code);
        } else {
            self.release(code);
        }
    }

    pub fn is_down(&self, code: usize) -> bool {
        self.down.get(code).copied().unwrap_or(false)
    }

    pub fn release_all(&mut self) {
        self.down = [false; KEY_COUNT];
    }
}

impl Default for Keys {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held: Vec<usize> = (0..KEY_COUNT).filter(|&code| self.down[code]).collect();
        f.debug_struct("Keys").field("held", &held).finish()
    }
}

/// Everything a player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
    Serve,
    Confirm,
    LevelUp,
    LevelDown,
    SelectPlayer1,
    SelectPlayer2,
}

impl Action {
    pub const COUNT: usize = 10;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Player1Up,
        Action::Player1Down,
        Action::Player2Up,
        Action::Player2Down,
        Action::Serve,
        Action::Confirm,
        Action::LevelUp,
        Action::LevelDown,
        Action::SelectPlayer1,
        Action::SelectPlayer2,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Key code bound to each action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    codes: [usize; Action::COUNT],
}

impl KeyBindings {
    pub fn code(&self, action: Action) -> usize {
        self.codes[action.index()]
    }

    pub fn bind(&mut self, action: Action, code: usize) {
        self.codes[action.index()] = code;
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            codes: [0; Action::COUNT],
        };
        bindings.bind(Action::Player1Up, key::UP);
        bindings.bind(Action::Player1Down, key::DOWN);
        bindings.bind(Action::Player2Up, key::W);
        bindings.bind(Action::Player2Down, key::S);
        bindings.bind(Action::Serve, key::SPACE);
        bindings.bind(Action::Confirm, key::ENTER);
        // Menu only, so sharing the arrows with player 1 is fine
        bindings.bind(Action::LevelUp, key::UP);
        bindings.bind(Action::LevelDown, key::DOWN);
        bindings.bind(Action::SelectPlayer1, key::RIGHT);
        bindings.bind(Action::SelectPlayer2, key::LEFT);
        bindings
    }
}

/// Per-action view of the keyboard with edge detection.
///
/// Sample once per frame. An action is "just pressed" only on the frame its
/// key goes down, so holding a key fires a discrete action once; it re-arms
/// after the key is released.
#[derive(Debug, Clone)]
pub struct InputTracker {
    bindings: KeyBindings,
    current: [bool; Action::COUNT],
    previous: [bool; Action::COUNT],
}

impl InputTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            current: [false; Action::COUNT],
            previous: [false; Action::COUNT],
        }
    }

    pub fn sample(&mut self, keys: &Keys) {
        self.previous = self.current;
        for action in Action::ALL {
            self.current[action.index()] = keys.is_down(self.bindings.code(action));
        }
    }

    pub fn is_down(&self, action: Action) -> bool {
        self.current[action.index()]
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.current[action.index()] && !self.previous[action.index()]
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_ignore_out_of_range_codes() {
        let mut keys = Keys::new();
        keys.press(KEY_COUNT + 5);
        assert!(!keys.is_down(KEY_COUNT + 5));
        keys.press(key::W);
        assert!(keys.is_down(key::W));
        keys.release(key::W);
        assert!(!keys.is_down(key::W));
    }

    #[test]
    fn test_held_key_fires_once() {
        let mut keys = Keys::new();
        let mut tracker = InputTracker::default();
        keys.press(key::SPACE);

        let mut fired = 0;
        for _ in 0..5 {
            tracker.sample(&keys);
            if tracker.just_pressed(Action::Serve) {
                fired += 1;
            }
            assert!(tracker.is_down(Action::Serve));
        }
        assert_eq!(fired, 1, "Held key should only fire on the rising edge");
    }

    #[test]
    fn test_key_rearms_after_release() {
        let mut keys = Keys::new();
        let mut tracker = InputTracker::default();

        keys.press(key::ENTER);
        tracker.sample(&keys);
        assert!(tracker.just_pressed(Action::Confirm));

        keys.release(key::ENTER);
        tracker.sample(&keys);
        assert!(!tracker.just_pressed(Action::Confirm));

        keys.press(key::ENTER);
        tracker.sample(&keys);
        assert!(tracker.just_pressed(Action::Confirm));
    }

    #[test]
    fn test_shared_key_drives_both_actions() {
        let mut keys = Keys::new();
        let mut tracker = InputTracker::default();
        keys.press(key::UP);
        tracker.sample(&keys);
        assert!(tracker.just_pressed(Action::LevelUp));
        assert!(tracker.is_down(Action::Player1Up));
        assert!(!tracker.is_down(Action::Player2Up));
    }

    #[test]
    fn test_rebinding() {
        let mut bindings = KeyBindings::default();
        bindings.bind(Action::Serve, key::D);
        let mut tracker = InputTracker::new(bindings);
        let mut keys = Keys::new();
        keys.press(key::SPACE);
        tracker.sample(&keys);
        assert!(!tracker.is_down(Action::Serve));
        keys.press(key::D);
        tracker.sample(&keys);
        assert!(tracker.just_pressed(Action::Serve));
    }
}
