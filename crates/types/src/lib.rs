//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (ECS, gameplay systems, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed logical display subdivided into square cells:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOGICAL_WIDTH` | 640 | Logical display width in pixels |
//! | `LOGICAL_HEIGHT` | 1280 | Logical display height in pixels |
//! | `GRID_WIDTH` | 8 | Columns (indexed 0-7, left to right) |
//! | `GRID_HEIGHT` | 16 | Rows (indexed 0-15, top to bottom) |
//! | `X_INTERVAL` / `Y_INTERVAL` | 80 | Pixels per cell |
//!
//! # Rules
//!
//! - **Fall speed**: 240 logical pixels per second, doubled while soft drop is held
//! - **Chains**: a connected same-color group of at least 4 blobs is cleared
//! - **Scoring**: `members × multiplier`, the multiplier starting at 10 and growing
//!   by 10 for every further chain cleared in the same pass
//!
//! # Examples
//!
//! ```
//! use tui_puyo_types::{Direction, Shape, GRID_HEIGHT, GRID_WIDTH};
//!
//! // A freshly spawned pair is vertical with `other` below `center`.
//! let shape = Shape::from_positions((0, 0), (0, 1));
//! assert_eq!(shape, Shape::Down);
//!
//! // Rotating clockwise swings `other` to the left of `center`.
//! assert_eq!(shape.rotated(Direction::Right), Shape::Left);
//! assert_eq!(Shape::Left.offset(), (-1, 0));
//!
//! assert_eq!(GRID_WIDTH, 8);
//! assert_eq!(GRID_HEIGHT, 16);
//! ```

pub mod geometry;
pub mod input;

pub use geometry::{FPoint, FRect, IPoint, IRect};
pub use input::{InputSnapshot, Key};

/// Logical display width in pixels
pub const LOGICAL_WIDTH: i32 = 640;

/// Logical display height in pixels
pub const LOGICAL_HEIGHT: i32 = 1280;

/// Grid width in cells (8 columns)
pub const GRID_WIDTH: usize = 8;

/// Grid height in cells (16 rows)
pub const GRID_HEIGHT: usize = 16;

/// Total number of grid cells
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// Horizontal pixels per cell
pub const X_INTERVAL: i32 = LOGICAL_WIDTH / GRID_WIDTH as i32;

/// Vertical pixels per cell
pub const Y_INTERVAL: i32 = LOGICAL_HEIGHT / GRID_HEIGHT as i32;

/// Base fall speed in logical pixels per second
pub const FALL_SPEED: f32 = 240.0;

/// Fall speed multiplier while soft drop is held
pub const SOFT_DROP_MULTIPLIER: f32 = 2.0;

/// Smallest connected group that gets cleared
pub const MIN_CHAIN_LEN: usize = 4;

/// Score multiplier of the first chain in a clear pass, and the step added per further chain
pub const CHAIN_SCORE_STEP: u32 = 10;

/// Fixed simulation steps per second
pub const TICK_RATE: f32 = 60.0;

/// Maximum simulation steps run per rendered frame
pub const MAX_STEPS_PER_FRAME: usize = 5;

/// Side length, in atlas pixels, of one blob sprite
pub const SPRITE_SIZE: i32 = 50;

/// Grid position of the `center` blob of a freshly spawned pair
pub const SPAWN_CENTER: (i32, i32) = (0, 0);

/// Grid position of the `other` blob of a freshly spawned pair
pub const SPAWN_OTHER: (i32, i32) = (0, 1);

/// The four blob colors
///
/// The discriminants match the sprite order in the blob texture atlas
/// (`(value - 1) * SPRITE_SIZE` is the sprite's x offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobColor {
    Red = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
}

impl BlobColor {
    /// Every color, in palette order
    pub const ALL: [BlobColor; 4] = [
        BlobColor::Red,
        BlobColor::Yellow,
        BlobColor::Green,
        BlobColor::Blue,
    ];

    /// Zero-based column of this color's sprite in the texture atlas
    pub fn atlas_column(self) -> i32 {
        self as i32 - 1
    }

    /// Inverse of [`BlobColor::atlas_column`]
    pub fn from_atlas_column(column: i32) -> Option<Self> {
        match column {
            0 => Some(BlobColor::Red),
            1 => Some(BlobColor::Yellow),
            2 => Some(BlobColor::Green),
            3 => Some(BlobColor::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobColor::Red => "red",
            BlobColor::Yellow => "yellow",
            BlobColor::Green => "green",
            BlobColor::Blue => "blue",
        }
    }
}

/// Horizontal move or rotation direction
///
/// For rotation, `Left` is counter-clockwise and `Right` is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta of a horizontal move
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Orientation of a pair, named after where `center` sits relative to `other`
/// for the horizontal shapes and where `other` sits for the vertical ones.
///
/// - **Right**: `center` left of `other`
/// - **Left**: `center` right of `other`
/// - **Up**: `other` above `center`
/// - **Down**: `other` below `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Left,
    Right,
    Up,
    Down,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Left, Shape::Right, Shape::Up, Shape::Down];

    /// Derive the shape from `center` and `other` grid coordinates
    pub fn from_positions(center: (i32, i32), other: (i32, i32)) -> Self {
        let (xc, yc) = center;
        let (xo, yo) = other;
        if xc < xo && yc == yo {
            Shape::Right
        } else if xc > xo && yc == yo {
            Shape::Left
        } else if xc == xo && yc > yo {
            Shape::Up
        } else {
            Shape::Down
        }
    }

    /// Grid offset of `other` relative to `center`
    pub fn offset(self) -> (i32, i32) {
        match self {
            Shape::Right => (1, 0),
            Shape::Left => (-1, 0),
            Shape::Up => (0, -1),
            Shape::Down => (0, 1),
        }
    }

    /// Shape after one rotation step around `center`
    pub fn rotated(self, dir: Direction) -> Self {
        match (self, dir) {
            (Shape::Right, Direction::Left) => Shape::Up,
            (Shape::Up, Direction::Left) => Shape::Left,
            (Shape::Left, Direction::Left) => Shape::Down,
            (Shape::Down, Direction::Left) => Shape::Right,
            (Shape::Right, Direction::Right) => Shape::Down,
            (Shape::Down, Direction::Right) => Shape::Left,
            (Shape::Left, Direction::Right) => Shape::Up,
            (Shape::Up, Direction::Right) => Shape::Right,
        }
    }

    /// Whether `other` and `center` share a column
    pub fn is_vertical(self) -> bool {
        matches!(self, Shape::Up | Shape::Down)
    }
}
