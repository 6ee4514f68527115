//! Report rendering: a serializable summary and the fixed-width text layout.

use std::fmt::Write;

use serde::Serialize;

use crate::core::FhssCore;
use crate::domain::DomainParams;
use crate::uid::Uid;

/// Values per line in the text layout.
pub const VALUES_PER_LINE: usize = 10;

/// Everything the host prints for one derivation.
#[derive(Debug, Clone, Serialize)]
pub struct HopReport {
    pub uid: Uid,
    pub seed: u32,
    pub domain: &'static str,
    pub sync_channel: u8,
    pub total_hops: usize,
    pub sequence: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<Vec<u32>>,
}

impl HopReport {
    pub fn new(core: &FhssCore) -> Self {
        let seq = core.sequence();
        Self {
            uid: core.uid(),
            seed: core.seed(),
            domain: core.domain().name,
            sync_channel: seq.sync_channel(),
            total_hops: seq.len(),
            sequence: seq.as_slice().to_vec(),
            frequencies: None,
        }
    }

    /// Attach the centre frequency (Hz) of every hop.
    pub fn with_frequencies(mut self, domain: &DomainParams) -> Self {
        self.frequencies = Some(
            self.sequence
                .iter()
                .filter_map(|&ch| domain.channel_frequency(usize::from(ch)))
                .collect(),
        );
        self
    }
}

/// Two-column right-aligned values, each followed by a space, ten per line.
pub fn format_sequence(hops: &[u8]) -> String {
    let mut out = String::with_capacity(hops.len() * 3 + hops.len() / VALUES_PER_LINE + 1);
    for (i, ch) in hops.iter().enumerate() {
        let _ = write!(out, "{ch:>2} ");
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.push('\n');
        }
    }
    if hops.len() % VALUES_PER_LINE != 0 {
        out.push('\n');
    }
    out
}

/// One line per hop: hop index, channel, centre frequency in Hz.
pub fn format_frequencies(hops: &[u8], domain: &DomainParams) -> String {
    let mut out = String::new();
    for (i, &ch) in hops.iter().enumerate() {
        if let Some(freq) = domain.channel_frequency(usize::from(ch)) {
            let _ = writeln!(out, "{i:>3} {ch:>2} {freq}");
        }
    }
    out
}
