//! Key bindings and the per-frame keyboard snapshot consumed by the game.

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    RotateLeft,
    RotateRight,
    Pause,
    Restart,
}

impl Key {
    pub const COUNT: usize = 7;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Left,
        Key::Right,
        Key::Down,
        Key::RotateLeft,
        Key::RotateRight,
        Key::Pause,
        Key::Restart,
    ];

    #[inline]
    fn idx(self) -> usize {
        self as usize
    }
}

/// Boolean-per-key state for the current and previous frame
///
/// Call [`InputSnapshot::advance`] once per frame before applying that frame's
/// key changes, so edge queries compare against the previous frame.
///
/// ```
/// use tui_puyo_types::{InputSnapshot, Key};
///
/// let mut keys = InputSnapshot::default();
/// keys.set(Key::Down, true);
/// assert!(keys.just_pressed(Key::Down));
///
/// keys.advance();
/// assert!(keys.is_held(Key::Down));
/// assert!(!keys.just_pressed(Key::Down));
///
/// keys.advance();
/// keys.set(Key::Down, false);
/// assert!(keys.just_released(Key::Down));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    current: [bool; Key::COUNT],
    previous: [bool; Key::COUNT],
}

impl InputSnapshot {
    /// Start a new frame: the current state becomes the previous state
    pub fn advance(&mut self) {
        self.previous = self.current;
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.current[key.idx()] = down;
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.current[key.idx()] && !self.previous[key.idx()]
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.current[key.idx()]
    }

    pub fn just_released(&self, key: Key) -> bool {
        !self.current[key.idx()] && self.previous[key.idx()]
    }

    /// Release every key in the current frame
    pub fn release_all(&mut self) {
        self.current = [false; Key::COUNT];
    }
}
