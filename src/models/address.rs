//! IPv4 address with optional CIDR prefix length.
//!
//! Provides [`Address`], stored as a big-endian `u32` plus a prefix length.
//! Bits beyond the prefix are always zero, so an [`Address`] with a prefix
//! shorter than 32 is the network address of its subnet.

use super::AddressInput;
use crate::error::{AddressError, Result};
use crate::processing::{mask, netmask_bits, normalize, pack_octets, unpack_octets, MAX_LENGTH};
use itertools::Itertools;
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::Div;
use std::str::FromStr;

/// IPv4 address with CIDR prefix length.
///
/// A plain `Copy` value: mutation goes through `&mut self`, so sharing a
/// mutable one across threads needs outside synchronization. Every mutator
/// has a non-mutating counterpart that returns a new [`Address`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash)]
pub struct Address {
    value: u32,
    prefix_length: u8,
}

impl Address {
    /// Create an [`Address`] from any supported input.
    ///
    /// # Examples
    /// ```
    /// use ip_address::Address;
    /// let net = Address::new("12.4.97.8/24").unwrap();
    /// assert_eq!(net.to_string(), "12.4.97.0/24");
    /// assert_eq!(Address::new([12, 4, 97, 8]).unwrap(), Address::new(201613576).unwrap());
    /// ```
    pub fn new<T: Into<AddressInput>>(input: T) -> Result<Address> {
        let (value, prefix_length) = normalize(&input.into())?;
        Address::from_parts(value, prefix_length)
    }

    /// Build from an integer value and prefix length, masking the value.
    pub fn from_parts(value: u32, prefix_length: u8) -> Result<Address> {
        Ok(Address {
            value: mask(value, prefix_length)?,
            prefix_length,
        })
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Change the prefix length, zeroing the bits beyond it.
    pub fn set_prefix_length(&mut self, len: u8) -> Result<()> {
        self.value = mask(self.value, len)?;
        self.prefix_length = len;
        log::debug!("set_prefix_length({len}) -> {self}");
        Ok(())
    }

    /// A copy of this address with prefix length `len`.
    ///
    /// # Examples
    /// ```
    /// use ip_address::Address;
    /// let ip = Address::new("12.4.97.8").unwrap();
    /// assert_eq!(ip.with_prefix_length(24).unwrap().to_string(), "12.4.97.0/24");
    /// ```
    pub fn with_prefix_length(&self, len: u8) -> Result<Address> {
        let mut addr = *self;
        addr.set_prefix_length(len)?;
        Ok(addr)
    }

    /// Octet `index`, 0 being the most significant.
    pub fn octet(&self, index: usize) -> Result<u8> {
        self.octets()
            .get(index)
            .copied()
            .ok_or(AddressError::IndexOutOfRange(index))
    }

    /// Replace octet `index` with `val`.
    ///
    /// The address is rebuilt from its octets as if freshly constructed from
    /// a four-octet sequence, so the prefix length goes back to 32. Use
    /// [`Address::set_octet_keep_prefix`] to keep the current prefix.
    ///
    /// # Examples
    /// ```
    /// use ip_address::Address;
    /// let mut ip = Address::new("12.4.97.0/24").unwrap();
    /// ip.set_octet(3, 8).unwrap();
    /// assert_eq!(ip.to_string(), "12.4.97.8");
    /// ```
    pub fn set_octet(&mut self, index: usize, val: u32) -> Result<()> {
        let octets = self.replaced_octet(index, val)?;
        *self = Address::new(octets)?;
        log::debug!("set_octet({index}, {val}) -> {self}");
        Ok(())
    }

    /// Replace octet `index` with `val`, then re-mask with the current
    /// prefix length. An octet beyond the prefix is therefore zeroed again.
    pub fn set_octet_keep_prefix(&mut self, index: usize, val: u32) -> Result<()> {
        let octets = self.replaced_octet(index, val)?;
        *self = Address::from_parts(pack_octets(&octets)?, self.prefix_length)?;
        log::debug!("set_octet_keep_prefix({index}, {val}) -> {self}");
        Ok(())
    }

    fn replaced_octet(&self, index: usize, val: u32) -> Result<Vec<i64>> {
        if index > 3 {
            return Err(AddressError::IndexOutOfRange(index));
        }
        if val > u32::from(u8::MAX) {
            return Err(AddressError::OctetOutOfRange(val));
        }
        let mut octets: Vec<i64> = self.octets().iter().map(|&o| i64::from(o)).collect();
        octets[index] = i64::from(val);
        Ok(octets)
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        unpack_octets(self.value)
    }

    pub fn to_integer(&self) -> u32 {
        self.value
    }

    /// The netmask of this prefix length, e.g. `0xFFFFFF00` for a /24.
    pub fn netmask(&self) -> u32 {
        // prefix_length never exceeds MAX_LENGTH once constructed
        netmask_bits(self.prefix_length).unwrap_or(u32::MAX)
    }

    /// Exact equality against anything that can become an [`Address`].
    ///
    /// Unrecognized input is simply not equal.
    pub fn equals<T: Into<AddressInput>>(&self, other: T) -> bool {
        match Address::new(other) {
            Ok(other) => *self == other,
            Err(e) => {
                log::trace!("equals: {e}");
                false
            }
        }
    }

    /// Is `other` inside the subnet described by this address?
    ///
    /// `other` is masked to our prefix length and compared exactly. A /32
    /// only contains itself.
    ///
    /// # Examples
    /// ```
    /// use ip_address::Address;
    /// let net = Address::new("10.0.0.0/8").unwrap();
    /// assert!(net.contains("10.1.2.3").unwrap());
    /// assert!(!net.contains("11.0.0.0").unwrap());
    /// ```
    pub fn contains<T: Into<AddressInput>>(&self, other: T) -> Result<bool> {
        let other = Address::new(other)?;
        Ok(*self == other.with_prefix_length(self.prefix_length)?)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.octets().iter().join("."))?;
        if self.prefix_length != MAX_LENGTH {
            write!(f, "/{}", self.prefix_length)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Address> {
        Address::new(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Address> {
        Address::new(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address {
            value: u32::from(ip),
            prefix_length: MAX_LENGTH,
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.value)
    }
}

/// `addr / 24` is [`Address::with_prefix_length`].
impl Div<u8> for Address {
    type Output = Result<Address>;

    fn div(self, len: u8) -> Result<Address> {
        self.with_prefix_length(len)
    }
}
