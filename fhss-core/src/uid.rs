//! Binding phrase to 6-byte UID.
//!
//! A phrase of 4 to 6 comma-separated integers in 0..=255 is taken literally,
//! left-padded with zeros. Anything else is hashed the way the firmware build
//! embeds it: MD5 over `-DMY_BINDING_PHRASE="<phrase>"`, first six bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// UID length in bytes.
pub const UID_LEN: usize = 6;

const MIN_LITERAL_TOKENS: usize = 4;

/// Link UID (6 bytes). Serialized as lowercase hex.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Uid(#[serde(with = "hex_6")] [u8; UID_LEN]);

mod hex_6 {
    use super::UID_LEN;
    use serde::{Deserialize, Deserializer, Serializer};
    pub fn serialize<S: Serializer>(v: &[u8; UID_LEN], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(v))
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; UID_LEN], D::Error> {
        let s: String = Deserialize::deserialize(d)?;
        let buf = hex::decode(&s).map_err(serde::de::Error::custom)?;
        buf.try_into()
            .map_err(|_| serde::de::Error::custom("expected 6 bytes"))
    }
}

/// How a phrase resolves: literal bytes, or the phrase to be hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UidSource<'a> {
    Parsed([u8; UID_LEN]),
    Fallback(&'a str),
}

/// Decide which derivation path a phrase takes. Pure; never fails.
pub fn resolve(phrase: &str) -> UidSource<'_> {
    let tokens: Vec<Option<u8>> = phrase.split(',').map(parse_token).collect();
    if !(MIN_LITERAL_TOKENS..=UID_LEN).contains(&tokens.len()) {
        return UidSource::Fallback(phrase);
    }
    let mut out = [0u8; UID_LEN];
    let pad = UID_LEN - tokens.len();
    for (slot, tok) in out[pad..].iter_mut().zip(&tokens) {
        match tok {
            Some(b) => *slot = *b,
            None => return UidSource::Fallback(phrase),
        }
    }
    UidSource::Parsed(out)
}

/// Code points of digit zero for every Unicode decimal-digit (Nd) run, Unicode 14.
/// Each run holds ten consecutive digits 0..=9.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script (`4`, `٤`, `４`, `४`).
/// Other numeric characters (`²`, `Ⅻ`, `½`) are not decimal digits.
fn decimal_digit(c: char) -> Option<u8> {
    if let Some(d) = c.to_digit(10) {
        return Some(d as u8);
    }
    if !c.is_numeric() {
        return None;
    }
    let cp = u32::from(c);
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let offset = cp - DECIMAL_ZEROS[run];
    (offset < 10).then_some(offset as u8)
}

/// A token is a byte only if it is all decimal digits and its value is below 256.
fn parse_token(tok: &str) -> Option<u8> {
    if tok.is_empty() {
        return None;
    }
    // leading zeros are fine ("007")
    tok.chars().try_fold(0u8, |acc, c| {
        let d = decimal_digit(c)?;
        acc.checked_mul(10)?.checked_add(d)
    })
}

/// First six bytes of MD5 over the build-flag form of the phrase.
pub fn hash_phrase(phrase: &str) -> [u8; UID_LEN] {
    let define = format!("-DMY_BINDING_PHRASE=\"{phrase}\"");
    let digest = md5::compute(define.as_bytes());
    let mut id = [0u8; UID_LEN];
    id.copy_from_slice(&digest.0[..UID_LEN]);
    id
}

impl Uid {
    /// Derive the UID for a binding phrase.
    pub fn from_phrase(phrase: &str) -> Self {
        match resolve(phrase) {
            UidSource::Parsed(bytes) => Uid(bytes),
            UidSource::Fallback(p) => Uid(hash_phrase(p)),
        }
    }

    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Uid(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; UID_LEN]> for Uid {
    fn from(bytes: [u8; UID_LEN]) -> Self {
        Uid(bytes)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_tokens_left_padded() {
        let uid = Uid::from_phrase("42,13,9,8");
        assert_eq!(uid.as_bytes(), &[0x00, 0x00, 0x2A, 0x0D, 0x09, 0x08]);
        assert_eq!(uid.to_string(), "00002a0d0908");
    }

    #[test]
    fn six_tokens_taken_verbatim() {
        assert_eq!(
            resolve("1,2,3,4,5,6"),
            UidSource::Parsed([1, 2, 3, 4, 5, 6])
        );
        assert_eq!(resolve("255,0,0,0,0,255"), UidSource::Parsed([255, 0, 0, 0, 0, 255]));
    }

    #[test]
    fn leading_zeros_accepted() {
        assert_eq!(resolve("007,0,00,1"), UidSource::Parsed([0, 0, 7, 0, 0, 1]));
    }

    #[test]
    fn non_ascii_decimal_digits_parse() {
        let expected = UidSource::Parsed([0, 0, 42, 13, 9, 8]);
        assert_eq!(resolve("٤٢,١٣,٩,٨"), expected);
        assert_eq!(resolve("４２,13,9,8"), expected);
        assert_eq!(resolve("४२,१३,९,८"), expected);
        assert_eq!(resolve("𝟒𝟐,13,9,8"), expected);
        assert_eq!(Uid::from_phrase("٤٢,١٣,٩,٨").to_hex(), "00002a0d0908");
        // out of range in any script still falls back
        assert_eq!(Uid::from_phrase("٢٥٦,1,2,3").to_hex(), "a35e95418763");
    }

    #[test]
    fn numeric_but_not_decimal_hashes() {
        assert_eq!(resolve("²,13,9,8"), UidSource::Fallback("²,13,9,8"));
        assert_eq!(Uid::from_phrase("²,13,9,8").to_hex(), "f1852c12a26e");
        assert_eq!(Uid::from_phrase("Ⅻ,1,2,3").to_hex(), "3f5a87b41a42");
    }

    #[test]
    fn decimal_digit_values() {
        assert_eq!(decimal_digit('7'), Some(7));
        assert_eq!(decimal_digit('\u{0669}'), Some(9));
        assert_eq!(decimal_digit('\u{FF10}'), Some(0));
        assert_eq!(decimal_digit('\u{1FBF9}'), Some(9));
        assert_eq!(decimal_digit('²'), None);
        assert_eq!(decimal_digit('½'), None);
        assert_eq!(decimal_digit('a'), None);
    }

    #[test]
    fn fallback_paths() {
        for phrase in [
            "",
            ",,,,",
            "1,2,3",
            "0,0,0,0,0,0,0",
            "1,2,3,256",
            "a,b,c,d",
            "1,2,x,4",
            "1, 2,3,4",
            "+1,2,3,4",
            "-1,2,3,4",
            "1,2,3,99999999999999999999",
            "my secret phrase",
        ] {
            assert_eq!(resolve(phrase), UidSource::Fallback(phrase), "{phrase:?}");
        }
    }

    #[test]
    fn fallback_golden_digests() {
        let cases = [
            ("", "d4323ba3144a"),
            ("hello", "e27128842c79"),
            ("1,2,3", "dd2088abf1bb"),
            ("1,2,3,256", "16c61c9ac546"),
            ("a,b,c,d", "8d5379d69a97"),
            (",,,,", "b1d6b8a17efd"),
            ("my secret phrase", "264e5b74f5ea"),
            ("0,0,0,0,0,0,0", "5c20fb62ce5f"),
        ];
        for (phrase, hex) in cases {
            assert_eq!(Uid::from_phrase(phrase).to_hex(), hex, "{phrase:?}");
        }
    }

    #[test]
    fn serde_as_hex() {
        let uid = Uid::from_bytes([0, 0, 0x2A, 0x0D, 0x09, 0x08]);
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"00002a0d0908\"");
        let back: Uid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uid);
        assert!(serde_json::from_str::<Uid>("\"0011\"").is_err());
    }
}
