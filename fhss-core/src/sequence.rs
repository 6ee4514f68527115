//! Hop sequence construction: sync channel at every block start, then an
//! in-place shuffle within each block driven by the firmware RNG.

use std::ops::Index;

use crate::protocol::FHSS_SEQUENCE_LEN;
use crate::rng::FirmwareRng;

/// Sync channel for a band with `freq_count` channels.
pub fn sync_channel_for(freq_count: usize) -> u8 {
    (freq_count / 2) as u8
}

/// Ordered channel indices, each in `0..freq_count`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopSequence {
    freq_count: usize,
    hops: [u8; FHSS_SEQUENCE_LEN],
}

/// Sync at each block start; the channel that would collide with sync moves to 0.
fn initial_layout(freq_count: usize) -> [u8; FHSS_SEQUENCE_LEN] {
    let sync = sync_channel_for(freq_count);
    let mut hops = [0u8; FHSS_SEQUENCE_LEN];
    for (i, slot) in hops.iter_mut().enumerate() {
        let ch = i % freq_count;
        *slot = if ch == 0 {
            sync
        } else if ch == usize::from(sync) {
            0
        } else {
            ch as u8
        };
    }
    hops
}

impl HopSequence {
    /// Build the sequence for `freq_count` channels (1..=256), consuming draws from `rng`.
    ///
    /// Swaps run in increasing index order over the live array. A swap whose
    /// target falls past the end (partial trailing block) is skipped.
    pub fn build(freq_count: usize, rng: &mut FirmwareRng) -> Self {
        debug_assert!(
            (1..=FHSS_SEQUENCE_LEN).contains(&freq_count),
            "freq_count out of range: {freq_count}"
        );
        let mut hops = initial_layout(freq_count);
        for i in 0..FHSS_SEQUENCE_LEN {
            if i % freq_count == 0 {
                continue;
            }
            let block_start = (i / freq_count) * freq_count;
            let offset = rng.next_bounded((freq_count - 1) as u32) as usize + 1;
            let swap_idx = block_start + offset;
            if swap_idx < FHSS_SEQUENCE_LEN {
                hops.swap(i, swap_idx);
            }
        }
        Self { freq_count, hops }
    }

    /// Build with a fresh generator seeded from `seed`.
    pub fn from_seed(freq_count: usize, seed: u32) -> Self {
        Self::build(freq_count, &mut FirmwareRng::new(seed))
    }

    pub fn freq_count(&self) -> usize {
        self.freq_count
    }

    /// Channel at the start of the second block (`hops[freq_count]`).
    /// For a single-block band this wraps to index 0.
    pub fn sync_channel(&self) -> u8 {
        self.hops[self.freq_count % FHSS_SEQUENCE_LEN]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.hops
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.hops.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Blocks of `freq_count` hops; the last may be shorter.
    pub fn blocks(&self) -> std::slice::Chunks<'_, u8> {
        self.hops.chunks(self.freq_count)
    }
}

impl Index<usize> for HopSequence {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.hops[index]
    }
}
