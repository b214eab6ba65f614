//! Arbitrary-precision base encoding.
//!
//! Byte strings are read as one big-endian unsigned integer and re-expressed
//! in an arbitrary alphabet (base58, base62, ...). Leading zero bytes carry
//! no numeric weight, so each one is written as a leading `alphabet[0]` and
//! restored on decode, as base58 does.

use crate::error::{MathError, Result};
use dashu::integer::UBig;
use std::collections::HashMap;

const BASE58_BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const HEX: &str = "0123456789abcdef";

/// Ordered set of digit characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    digits: Vec<char>,
    lookup: HashMap<char, u32>,
}

impl Alphabet {
    /// Build an alphabet; needs at least two distinct characters.
    pub fn new(digits: &str) -> Result<Self> {
        let digits: Vec<char> = digits.chars().collect();
        if digits.len() < 2 {
            return Err(MathError::InvalidAlphabet(format!(
                "need at least 2 digits, got {}",
                digits.len()
            )));
        }
        let mut lookup = HashMap::with_capacity(digits.len());
        for (value, &ch) in digits.iter().enumerate() {
            if lookup.insert(ch, value as u32).is_some() {
                return Err(MathError::InvalidAlphabet(format!(
                    "duplicate digit {:?}",
                    ch
                )));
            }
        }
        Ok(Self { digits, lookup })
    }

    fn preset(digits: &'static str) -> Self {
        let digits: Vec<char> = digits.chars().collect();
        let lookup = digits
            .iter()
            .enumerate()
            .map(|(value, &ch)| (ch, value as u32))
            .collect();
        Self { digits, lookup }
    }

    /// Bitcoin base58 (no 0, O, I, l).
    pub fn base58() -> Self {
        Self::preset(BASE58_BITCOIN)
    }

    pub fn base62() -> Self {
        Self::preset(BASE62)
    }

    pub fn base36() -> Self {
        Self::preset(BASE36)
    }

    pub fn hex() -> Self {
        Self::preset(HEX)
    }

    pub fn base(&self) -> usize {
        self.digits.len()
    }

    fn zero_digit(&self) -> char {
        self.digits[0]
    }

    fn value_of(&self, ch: char, position: usize) -> Result<u32> {
        self.lookup
            .get(&ch)
            .copied()
            .ok_or(MathError::InvalidDigit { ch, position })
    }
}

/// Render an integer in the alphabet. Zero is the single digit `alphabet[0]`.
pub fn encode_integer(value: &UBig, alphabet: &Alphabet) -> String {
    let base = UBig::from(alphabet.base() as u64);
    let mut remaining = value.clone();
    let mut out = Vec::new();
    while remaining > UBig::ZERO {
        let digit = &remaining % &base;
        remaining = &remaining / &base;
        // digit < base <= usize::MAX
        let index = u64::try_from(digit).unwrap_or(0) as usize;
        out.push(alphabet.digits[index]);
    }
    if out.is_empty() {
        out.push(alphabet.zero_digit());
    }
    out.iter().rev().collect()
}

/// Parse an integer written in the alphabet. The empty string is zero.
pub fn decode_integer(text: &str, alphabet: &Alphabet) -> Result<UBig> {
    let base = UBig::from(alphabet.base() as u64);
    let mut value = UBig::ZERO;
    for (position, ch) in text.chars().enumerate() {
        let digit = alphabet.value_of(ch, position)?;
        value = value * &base + UBig::from(digit);
    }
    Ok(value)
}

/// Encode a byte string, preserving leading zero bytes.
pub fn encode(bytes: &[u8], alphabet: &Alphabet) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out: String = std::iter::repeat(alphabet.zero_digit())
        .take(zeros)
        .collect();
    let rest = &bytes[zeros..];
    if !rest.is_empty() {
        out.push_str(&encode_integer(&UBig::from_be_bytes(rest), alphabet));
    }
    out
}

/// Decode a string produced by [`encode`].
pub fn decode(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let zero = alphabet.zero_digit();
    let zeros = text.chars().take_while(|&c| c == zero).count();
    let mut out = vec![0u8; zeros];

    let rest: String = text.chars().skip(zeros).collect();
    if rest.is_empty() {
        return Ok(out);
    }
    // Report positions relative to the full input.
    let value = decode_integer(&rest, alphabet).map_err(|e| match e {
        MathError::InvalidDigit { ch, position } => MathError::InvalidDigit {
            ch,
            position: position + zeros,
        },
        other => other,
    })?;
    out.extend_from_slice(&value.to_be_bytes());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_rejects_short_and_duplicate_digits() {
        assert!(matches!(
            Alphabet::new("a"),
            Err(MathError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new("abca"),
            Err(MathError::InvalidAlphabet(_))
        ));
        assert_eq!(Alphabet::new("01").unwrap().base(), 2);
    }

    #[test]
    fn presets_have_expected_bases() {
        assert_eq!(Alphabet::base58().base(), 58);
        assert_eq!(Alphabet::base62().base(), 62);
        assert_eq!(Alphabet::base36().base(), 36);
        assert_eq!(Alphabet::hex().base(), 16);
    }

    #[test]
    fn base58_known_vector() {
        // "Hello World!" in Bitcoin base58
        let encoded = encode(b"Hello World!", &Alphabet::base58());
        assert_eq!(encoded, "2NEpo7TZRRrLZSi2U");
        assert_eq!(decode(&encoded, &Alphabet::base58()).unwrap(), b"Hello World!");
    }

    #[test]
    fn leading_zero_bytes_are_preserved() {
        let alphabet = Alphabet::base58();
        let bytes = [0u8, 0, 0x01, 0x02];
        let encoded = encode(&bytes, &alphabet);
        assert!(encoded.starts_with("11"));
        assert_eq!(decode(&encoded, &alphabet).unwrap(), bytes);
        assert_eq!(encode(&[0, 0], &alphabet), "11");
        assert_eq!(decode("11", &alphabet).unwrap(), vec![0, 0]);
    }

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[], &Alphabet::base62()), "");
        assert_eq!(decode("", &Alphabet::base62()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_matches_std_formatting() {
        let value = UBig::from(0xdead_beef_u64);
        assert_eq!(encode_integer(&value, &Alphabet::hex()), "deadbeef");
        assert_eq!(encode_integer(&UBig::ZERO, &Alphabet::hex()), "0");
    }

    #[test]
    fn integers_beyond_u128() {
        // 2^200 round trip through base36
        let value = UBig::ONE << 200;
        let text = encode_integer(&value, &Alphabet::base36());
        assert_eq!(decode_integer(&text, &Alphabet::base36()).unwrap(), value);
    }

    #[test]
    fn invalid_digit_reports_absolute_position() {
        let err = decode("11I", &Alphabet::base58()).unwrap_err();
        assert!(matches!(
            err,
            MathError::InvalidDigit {
                ch: 'I',
                position: 2
            }
        ));
    }
}
