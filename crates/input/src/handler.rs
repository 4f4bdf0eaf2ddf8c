//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key with no press or repeat event for `key_release_timeout_ms` is released.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{InputSnapshot, Key};

// Idle time after which a held key counts as released.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Builds the per-frame [`InputSnapshot`] from terminal key events
#[derive(Debug, Clone)]
pub struct KeyTracker {
    snapshot: InputSnapshot,
    /// Milliseconds since the last press/repeat of each held key
    idle_ms: [Option<u32>; Key::COUNT],
    key_release_timeout_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            snapshot: InputSnapshot::default(),
            idle_ms: [None; Key::COUNT],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Start a new frame; edge queries on the snapshot compare against the last one
    pub fn begin_frame(&mut self) {
        self.snapshot.advance();
    }

    /// Feed one terminal key event. Returns the mapped key, if any.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Option<Key> {
        let key = map_key(event.code)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key),
            KeyEventKind::Release => self.release(key),
        }
        Some(key)
    }

    pub fn press(&mut self, key: Key) {
        self.snapshot.set(key, true);
        self.idle_ms[key as usize] = Some(0);
    }

    pub fn release(&mut self, key: Key) {
        self.snapshot.set(key, false);
        self.idle_ms[key as usize] = None;
    }

    /// Age held keys by `elapsed_ms` and auto-release the ones that timed out.
    /// Returns the released keys.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Key, { Key::COUNT }> {
        let mut released = ArrayVec::new();
        for key in Key::ALL {
            let Some(idle) = self.idle_ms[key as usize].as_mut() else {
                continue;
            };
            *idle = idle.saturating_add(elapsed_ms);
            if *idle > self.key_release_timeout_ms {
                self.release(key);
                released.push(key);
            }
        }
        released
    }

    pub fn release_all(&mut self) {
        self.snapshot.release_all();
        self.idle_ms = [None; Key::COUNT];
    }

    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
