//! Domain models.
//!
//! - [`Address`] - IPv4 address with CIDR prefix length
//! - [`AddressInput`] - Candidate values an [`Address`] can be built from

mod address;
mod input;

// Re-export public types
pub use address::Address;
pub use input::AddressInput;
