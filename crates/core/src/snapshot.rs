use crate::types::{BlobColor, IPoint, GRID_HEIGHT, GRID_WIDTH};

/// Current state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Spawning a pair or waiting for the active pair to lock
    #[default]
    Pair,
    /// Locked or unsupported blobs are dropping
    Falling,
    /// Chain detection and clearing
    Score,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Pair => "pair",
            Phase::Falling => "falling",
            Phase::Score => "score",
        }
    }
}

/// Read-only copy of what a view needs to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [[Option<BlobColor>; GRID_WIDTH]; GRID_HEIGHT],
    /// Grid cells of the active pair (`center`, `other`)
    pub pair: Option<[IPoint; 2]>,
    pub score: u32,
    pub paused: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Option<BlobColor> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; GRID_WIDTH]; GRID_HEIGHT],
            pair: None,
            score: 0,
            paused: false,
            phase: Phase::Pair,
        }
    }
}
