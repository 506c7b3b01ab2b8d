//! Recognize the supported input shapes.
//!
//! Every check here is total: malformed input gives `None`/`false`, never an
//! error or a panic. The `parse_*` functions hand back what they parsed so
//! the normalizer does not have to parse twice.

use super::mask::MAX_LENGTH;
use crate::models::{Address, AddressInput};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; `\d` would also match other Unicode digits.
    static ref DOTTED_RE: Regex =
        Regex::new(r"^([0-9]+(?:\.[0-9]+){3})(?:/([0-9]+))?$").expect("Invalid Regex?");
}

/// The existing address, if `addr` is one.
pub fn as_address(addr: &AddressInput) -> Option<Address> {
    match addr {
        AddressInput::Address(a) => Some(*a),
        _ => None,
    }
}

/// Parse "a.b.c.d" or "a.b.c.d/n" into its octets and prefix length.
pub fn parse_dotted(s: &str) -> Option<([u8; 4], u8)> {
    let caps = DOTTED_RE.captures(s)?;
    let prefix_len = match caps.get(2) {
        Some(m) => m.as_str().parse::<u8>().ok()?,
        None => MAX_LENGTH,
    };
    if prefix_len > MAX_LENGTH {
        return None;
    }

    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(caps.get(1)?.as_str().split('.')) {
        *slot = part.parse::<u8>().ok()?;
    }
    Some((octets, prefix_len))
}

/// Exactly four values, each within 0-255.
pub fn parse_octets(xs: &[i64]) -> Option<[u8; 4]> {
    if xs.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (slot, &x) in octets.iter_mut().zip(xs) {
        *slot = u8::try_from(x).ok()?;
    }
    Some(octets)
}

/// An integer within 0..2^32.
pub fn parse_integer(n: i64) -> Option<u32> {
    u32::try_from(n).ok()
}

pub fn is_address(addr: &AddressInput) -> bool {
    as_address(addr).is_some()
}

pub fn is_dotted_string(addr: &AddressInput) -> bool {
    match addr {
        AddressInput::Dotted(s) => parse_dotted(s).is_some(),
        _ => false,
    }
}

pub fn is_octet_sequence(addr: &AddressInput) -> bool {
    match addr {
        AddressInput::Octets(xs) => parse_octets(xs).is_some(),
        _ => false,
    }
}

pub fn is_integer(addr: &AddressInput) -> bool {
    match addr {
        AddressInput::Integer(n) => parse_integer(*n).is_some(),
        _ => false,
    }
}

const SHAPES: [fn(&AddressInput) -> bool; 4] =
    [is_address, is_dotted_string, is_octet_sequence, is_integer];

/// Is `addr` any of the supported address shapes?
///
/// # Examples
/// ```
/// use ip_address::processing::classify::is_recognized;
/// assert!(is_recognized(&"12.4.97.0/24".into()));
/// assert!(!is_recognized(&"1.2..5".into()));
/// ```
pub fn is_recognized(addr: &AddressInput) -> bool {
    let recognized = SHAPES.iter().any(|shape| shape(addr));
    if !recognized {
        log::trace!("is_recognized({addr}) = false");
    }
    recognized
}
