//! Pipeline facade: phrase and domain in, UID, seed and sequence out, plus a
//! hop cursor the host advances once per hop interval.

use tracing::{debug, trace};

use crate::domain::{self, DomainParams};
use crate::error::Error;
use crate::protocol::{derive_seed, FHSS_SEQUENCE_LEN};
use crate::sequence::HopSequence;
use crate::uid::{self, Uid, UidSource};

/// One link's derived hopping state. Each instance owns its own sequence.
#[derive(Debug, Clone)]
pub struct FhssCore {
    uid: Uid,
    seed: u32,
    domain: &'static DomainParams,
    sequence: HopSequence,
    hop_index: usize,
}

impl FhssCore {
    /// Resolve `domain_name` and derive everything for `phrase`.
    /// Fails only on an unknown domain, before any derivation runs.
    pub fn new(phrase: &str, domain_name: &str) -> Result<Self, Error> {
        let domain = domain::lookup(domain_name)?;
        Ok(Self::with_domain(phrase, domain))
    }

    pub fn with_domain(phrase: &str, domain: &'static DomainParams) -> Self {
        let uid = match uid::resolve(phrase) {
            UidSource::Parsed(bytes) => {
                debug!("binding phrase parsed as literal uid");
                Uid::from_bytes(bytes)
            }
            UidSource::Fallback(p) => {
                debug!("binding phrase hashed");
                Uid::from_bytes(uid::hash_phrase(p))
            }
        };
        let seed = derive_seed(&uid);
        let sequence = HopSequence::from_seed(domain.freq_count, seed);
        debug!(uid = %uid, seed, domain = domain.name, "hop sequence built");
        Self {
            uid,
            seed,
            domain,
            sequence,
            hop_index: 0,
        }
    }

    pub fn uid(&self) -> Uid {
        self.uid
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn domain(&self) -> &'static DomainParams {
        self.domain
    }

    pub fn sequence(&self) -> &HopSequence {
        &self.sequence
    }

    /// Current position in the sequence.
    pub fn hop_index(&self) -> usize {
        self.hop_index
    }

    pub fn current_channel(&self) -> u8 {
        self.sequence[self.hop_index]
    }

    /// Move to the next hop (wrapping) and return its channel.
    pub fn advance(&mut self) -> u8 {
        self.hop_index = (self.hop_index + 1) % FHSS_SEQUENCE_LEN;
        trace!(hop_index = self.hop_index, "hop");
        self.current_channel()
    }

    /// Return to the start of the sequence (the sync slot).
    pub fn reset(&mut self) {
        self.hop_index = 0;
    }

    /// Channel for an absolute hop count, wrapping at the sequence length.
    pub fn channel_at(&self, hop: u64) -> u8 {
        self.sequence[(hop % FHSS_SEQUENCE_LEN as u64) as usize]
    }

    /// Centre frequency (Hz) of the current hop.
    pub fn current_frequency(&self) -> u32 {
        // every sequence value is below freq_count
        self.domain
            .channel_frequency(usize::from(self.current_channel()))
            .unwrap_or(self.domain.freq_start)
    }
}
