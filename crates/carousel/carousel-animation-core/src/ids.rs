#![allow(dead_code)]
//! Identifiers and cancellation tokens for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CarouselId(pub u32);

/// Monotonic allocator for CarouselId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_carousel: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_carousel(&mut self) -> CarouselId {
        let id = CarouselId(self.next_carousel);
        self.next_carousel = self.next_carousel.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Opaque token that invalidates scheduled step continuations.
///
/// Every stop and every (re)start bumps the animator's live token; a phase
/// stamped with an older token must perform no state mutation when it fires.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Generation(pub u64);

impl Generation {
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
