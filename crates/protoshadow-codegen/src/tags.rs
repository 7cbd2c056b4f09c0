//! Tag assignment
//!
//! Tags are handed out in declaration order: each request gets the smallest
//! tag at or after the cursor that no property claimed explicitly, and the
//! cursor then moves past it. Tags are never reused within a type.

use std::collections::BTreeSet;

/// First valid serialization tag
pub const FIRST_TAG: u32 = 1;

/// Per-type tag allocator
#[derive(Debug, Clone)]
pub struct TagAllocator {
    claimed: BTreeSet<u32>,
    next: u32,
}

impl TagAllocator {
    pub fn new(claimed: BTreeSet<u32>) -> Self {
        Self {
            claimed,
            next: FIRST_TAG,
        }
    }

    /// Allocate the next free tag
    pub fn allocate(&mut self) -> u32 {
        while self.claimed.contains(&self.next) {
            self.next += 1;
        }
        let tag = self.next;
        self.next += 1;
        tag
    }

    /// Tags explicitly claimed on the type
    pub fn claimed(&self) -> &BTreeSet<u32> {
        &self.claimed
    }
}

/// Assign `count` tags against a claimed set
pub fn assign_tags(claimed: &BTreeSet<u32>, count: usize) -> Vec<u32> {
    let mut allocator = TagAllocator::new(claimed.clone());
    (0..count).map(|_| allocator.allocate()).collect()
}
