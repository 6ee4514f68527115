//! Firmware libc `rand()` replica.
//!
//! `state = (1103515245 * state + 12345) & 0x7FFFFFFF`, computed in u32 with
//! wraparound. Truncating the product to 32 bits before masking to 31 is exact,
//! so no wider intermediate is needed.

use crate::protocol::{LCG_INCREMENT, LCG_MASK, LCG_MULTIPLIER};

/// Single-owner LCG state. Build one per sequence; never share.
#[derive(Debug, Clone)]
pub struct FirmwareRng {
    state: u32,
}

impl FirmwareRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the new 31-bit state.
    pub fn next_u31(&mut self) -> u32 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state
    }

    /// `next_u31() % bound`. Callers guarantee `bound > 0`.
    pub fn next_bounded(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "bound must be non-zero");
        self.next_u31() % bound
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Iterator for FirmwareRng {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u31())
    }
}
