//! IPv4 addresses with an optional CIDR prefix length.
//!
//! An [`Address`] can be built from a dotted string (`"12.4.97.8"`,
//! `"12.4.97.0/24"`), four octets, a single integer, or another [`Address`].
//! The value is always masked to its prefix length, so equality is exact and
//! subnet membership is a mask-and-compare:
//!
//! ```
//! use ip_address::Address;
//!
//! let net = Address::new("10.0.0.0/8").unwrap();
//! assert!(net.contains("10.1.2.3").unwrap());
//! assert_eq!(Address::new("1.2.3.4/24").unwrap(), Address::new("1.2.3.0/24").unwrap());
//! assert_ne!(Address::new("0.0.0.0/8").unwrap(), Address::new("0.0.0.0").unwrap());
//! ```

pub mod error;
pub mod models;
pub mod processing;

pub use error::{AddressError, Result};
pub use models::{Address, AddressInput};
pub use processing::{is_recognized, MAX_LENGTH};
