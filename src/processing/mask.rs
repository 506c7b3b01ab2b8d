//! Prefix-length masking.
//!
//! Zeroes every bit of an address beyond its prefix length, which turns a
//! host address into the network address of its subnet.

use crate::error::{AddressError, Result};

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Fail unless `len` is a valid prefix length (0-32).
pub fn check_prefix_length(len: u8) -> Result<u8> {
    if len > MAX_LENGTH {
        log::trace!("check_prefix_length({len}) rejected");
        Err(AddressError::invalid(format!("/{len}")))
    } else {
        Ok(len)
    }
}

/// Keep only the leading `len` bits of `value`.
///
/// `len == 0` masks everything off and is handled without shifting, since a
/// 32 bit shift of a `u32` overflows.
///
/// # Examples
/// ```
/// use ip_address::processing::mask::mask;
/// assert_eq!(mask(0x0102_0304, 24).unwrap(), 0x0102_0300);
/// assert_eq!(mask(0x0102_0304, 0).unwrap(), 0);
/// ```
pub fn mask(value: u32, len: u8) -> Result<u32> {
    match check_prefix_length(len)? {
        0 => Ok(0),
        len => {
            let right_len = MAX_LENGTH - len;
            Ok((value >> right_len) << right_len)
        }
    }
}

/// Convert a prefix length to its netmask as a u32.
///
/// # Examples
/// ```
/// use ip_address::processing::mask::netmask_bits;
/// assert_eq!(netmask_bits(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn netmask_bits(len: u8) -> Result<u32> {
    mask(u32::MAX, len)
}
