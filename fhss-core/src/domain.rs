//! Regulatory domain table.

use crate::error::Error;

/// Band parameters for one regulatory domain. Frequencies in Hz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParams {
    pub name: &'static str,
    pub freq_start: u32,
    pub freq_stop: u32,
    pub freq_count: usize,
    pub sync_center_freq: u32,
}

static DOMAINS: [DomainParams; 4] = [
    DomainParams {
        name: "FCC915",
        freq_start: 903_500_000,
        freq_stop: 926_900_000,
        freq_count: 40,
        sync_center_freq: 915_000_000,
    },
    DomainParams {
        name: "AU915",
        freq_start: 915_500_000,
        freq_stop: 926_900_000,
        freq_count: 20,
        sync_center_freq: 921_000_000,
    },
    DomainParams {
        name: "EU868",
        freq_start: 865_275_000,
        freq_stop: 869_575_000,
        freq_count: 13,
        sync_center_freq: 868_000_000,
    },
    DomainParams {
        name: "IN866",
        freq_start: 865_375_000,
        freq_stop: 866_950_000,
        freq_count: 4,
        sync_center_freq: 866_000_000,
    },
];

/// Domain used when none is given.
pub const DEFAULT_DOMAIN: &str = "FCC915";

/// Look up a domain by its exact (case-sensitive) name.
pub fn lookup(name: &str) -> Result<&'static DomainParams, Error> {
    DOMAINS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| Error::UnknownDomain(name.to_string()))
}

/// All supported domains, in table order.
pub fn all() -> &'static [DomainParams] {
    &DOMAINS
}

/// Names of all supported domains, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    DOMAINS.iter().map(|d| d.name)
}

impl DomainParams {
    /// Spacing between adjacent channels in Hz (integer division).
    pub fn channel_spacing(&self) -> u32 {
        if self.freq_count < 2 {
            return 0;
        }
        (self.freq_stop - self.freq_start) / (self.freq_count as u32 - 1)
    }

    /// Centre frequency of channel `index` in Hz, or `None` past the last channel.
    pub fn channel_frequency(&self, index: usize) -> Option<u32> {
        if index >= self.freq_count {
            return None;
        }
        Some(self.freq_start + index as u32 * self.channel_spacing())
    }
}
