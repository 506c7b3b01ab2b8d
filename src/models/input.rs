//! Candidate inputs accepted by [`Address::new`].

use super::Address;
use itertools::Itertools;
use std::fmt;
use std::net::Ipv4Addr;

/// A value that might describe an IPv4 address.
///
/// Nothing is validated here; the classifier decides whether a candidate is
/// recognized. Integer payloads are wide so that negative or oversized
/// values can reach the classifier and be rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// An existing address, copied as-is.
    Address(Address),
    /// Decimal-dotted text, e.g. "12.4.97.8" or "12.4.97.0/24".
    Dotted(String),
    /// Four octets, most significant first.
    Octets(Vec<i64>),
    /// The address as a single integer.
    Integer(i64),
}

impl fmt::Display for AddressInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressInput::Address(addr) => write!(f, "{addr:?}"),
            AddressInput::Dotted(s) => write!(f, "{s:?}"),
            AddressInput::Octets(xs) => write!(f, "[{}]", xs.iter().join(", ")),
            AddressInput::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<Address> for AddressInput {
    fn from(addr: Address) -> Self {
        AddressInput::Address(addr)
    }
}

impl From<&Address> for AddressInput {
    fn from(addr: &Address) -> Self {
        AddressInput::Address(*addr)
    }
}

impl From<&str> for AddressInput {
    fn from(s: &str) -> Self {
        AddressInput::Dotted(s.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(s: String) -> Self {
        AddressInput::Dotted(s)
    }
}

impl From<&String> for AddressInput {
    fn from(s: &String) -> Self {
        AddressInput::Dotted(s.clone())
    }
}

impl From<Vec<i64>> for AddressInput {
    fn from(xs: Vec<i64>) -> Self {
        AddressInput::Octets(xs)
    }
}

impl From<&[i64]> for AddressInput {
    fn from(xs: &[i64]) -> Self {
        AddressInput::Octets(xs.to_vec())
    }
}

impl From<[i64; 4]> for AddressInput {
    fn from(xs: [i64; 4]) -> Self {
        AddressInput::Octets(xs.to_vec())
    }
}

impl From<[i32; 4]> for AddressInput {
    fn from(xs: [i32; 4]) -> Self {
        AddressInput::Octets(xs.iter().map(|&x| i64::from(x)).collect())
    }
}

impl From<[u8; 4]> for AddressInput {
    fn from(xs: [u8; 4]) -> Self {
        AddressInput::Octets(xs.iter().map(|&x| i64::from(x)).collect())
    }
}

impl From<u32> for AddressInput {
    fn from(n: u32) -> Self {
        AddressInput::Integer(i64::from(n))
    }
}

impl From<i32> for AddressInput {
    fn from(n: i32) -> Self {
        AddressInput::Integer(i64::from(n))
    }
}

impl From<i64> for AddressInput {
    fn from(n: i64) -> Self {
        AddressInput::Integer(n)
    }
}

impl From<u64> for AddressInput {
    fn from(n: u64) -> Self {
        // Anything past i64::MAX is far outside the IPv4 range anyway.
        AddressInput::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<Ipv4Addr> for AddressInput {
    fn from(ip: Ipv4Addr) -> Self {
        AddressInput::from(u32::from(ip))
    }
}
