//! Firmware-compatible FHSS hop sequence derivation.
//! Pure computation: no I/O; the host supplies the phrase and domain and prints the result.
//!
//! phrase -> [`Uid`] -> seed -> [`FirmwareRng`] -> [`HopSequence`]

pub mod domain;
pub mod error;
pub mod protocol;
pub mod report;
pub mod rng;
pub mod sequence;
pub mod uid;

pub use domain::{DomainParams, DEFAULT_DOMAIN};
pub use error::Error;
pub use protocol::{derive_seed, FHSS_SEQUENCE_LEN, OTA_VERSION_ID};
pub use report::{format_sequence, HopReport};
pub use rng::FirmwareRng;
pub use sequence::HopSequence;
pub use uid::{Uid, UidSource};
pub use crate::core::FhssCore;

pub mod core;
pub mod ffi;
