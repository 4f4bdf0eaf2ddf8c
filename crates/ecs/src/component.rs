//! # Component System
//!
//! Components are plain data records with no behavior. Each type carries its
//! signature bit as an associated constant, so stores are indexed by that
//! constant instead of a runtime type name.
//!
//! # Example
//!
//! ```
//! use tui_puyo_ecs::Component;
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct Velocity {
//!     speed: f32,
//! }
//!
//! impl Component for Velocity {
//!     const ID: u8 = 0;
//! }
//! ```

/// Signature bit of a component type (0-31)
pub type ComponentId = u8;

/// Marker trait for ECS components
pub trait Component: 'static {
    /// Unique identifier for this component type, used as its signature bit.
    const ID: ComponentId;

    /// Human-readable type name for diagnostics
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
