//! Link protocol constants shared with the firmware, and seed derivation.

use crate::uid::Uid;

/// OTA protocol version. Folded into the seed so links on different versions never pair.
pub const OTA_VERSION_ID: u8 = 4;

/// Number of hops in one full sequence.
pub const FHSS_SEQUENCE_LEN: usize = 256;

/// Multiplier of the firmware libc `rand()` LCG.
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// Increment of the firmware libc `rand()` LCG.
pub const LCG_INCREMENT: u32 = 12_345;
/// Output mask: the generator yields 31-bit values.
pub const LCG_MASK: u32 = 0x7FFF_FFFF;

/// Fold the last four UID bytes and the OTA version into the 32-bit hop seed.
/// `uid[0]` and `uid[1]` do not participate.
pub fn derive_seed(uid: &Uid) -> u32 {
    let b = uid.as_bytes();
    (u32::from(b[2]) << 24)
        | (u32::from(b[3]) << 16)
        | (u32::from(b[4]) << 8)
        | u32::from(b[5] ^ OTA_VERSION_ID)
}
