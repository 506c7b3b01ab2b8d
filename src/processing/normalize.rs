//! Turn a recognized input into the canonical `(value, prefix_length)` pair.

use super::classify::{as_address, parse_dotted, parse_integer, parse_octets};
use super::mask::MAX_LENGTH;
use crate::error::{AddressError, Result};
use crate::models::AddressInput;

/// Largest value a single octet may hold.
pub const OCTET_MAX: i64 = 255;

/// Convert any supported input to an integer address and prefix length.
///
/// The value is not masked here; [`crate::Address`] applies the prefix.
pub fn normalize(input: &AddressInput) -> Result<(u32, u8)> {
    let pair = match input {
        AddressInput::Address(_) => {
            as_address(input).map(|addr| (addr.to_integer(), addr.prefix_length()))
        }
        AddressInput::Dotted(s) => parse_dotted(s)
            .map(|(octets, len)| (u32::from_be_bytes(octets), len)),
        AddressInput::Octets(xs) => match parse_octets(xs) {
            Some(_) => Some((pack_octets(xs)?, MAX_LENGTH)),
            None => None,
        },
        AddressInput::Integer(n) => parse_integer(*n).map(|value| (value, MAX_LENGTH)),
    };

    match pair {
        Some(pair) => {
            log::trace!("normalize({input}) = {pair:?}");
            Ok(pair)
        }
        None => Err(AddressError::invalid(input)),
    }
}

/// Pack four octets, most significant first, into one integer.
///
/// Checks the range again even when the classifier already accepted the
/// sequence.
///
/// # Examples
/// ```
/// use ip_address::processing::normalize::pack_octets;
/// assert_eq!(pack_octets(&[12, 4, 97, 8]).unwrap(), 201613576);
/// ```
pub fn pack_octets(xs: &[i64]) -> Result<u32> {
    if xs.len() != 4 || !xs.iter().all(|x| (0..=OCTET_MAX).contains(x)) {
        return Err(AddressError::invalid(AddressInput::Octets(xs.to_vec())));
    }
    let packed = xs.iter().fold(0i64, |acc, x| acc * 256 + x);
    u32::try_from(packed).map_err(|_| AddressError::invalid(AddressInput::Octets(xs.to_vec())))
}

/// Split an integer address into its four octets, most significant first.
pub fn unpack_octets(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}
