//! Per-entity bitmask of attached component types.

use crate::component::ComponentId;

/// Number of distinct component types a signature can record
pub const MAX_COMPONENTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature(u32);

impl Signature {
    pub const EMPTY: Signature = Signature(0);

    #[inline]
    pub fn set(&mut self, id: ComponentId, present: bool) {
        debug_assert!((id as usize) < MAX_COMPONENTS);
        if present {
            self.0 |= 1 << id;
        } else {
            self.0 &= !(1 << id);
        }
    }

    #[inline]
    pub fn contains(self, id: ComponentId) -> bool {
        (id as usize) < MAX_COMPONENTS && self.0 & (1 << id) != 0
    }

    /// Whether every bit of `other` is also set in `self`
    #[inline]
    pub fn contains_all(self, other: Signature) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}
