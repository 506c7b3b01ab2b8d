//! Address input processing.
//!
//! - [`classify`] - Recognizing the supported input shapes
//! - [`normalize`] - Converting a recognized input to `(value, prefix_length)`
//! - [`mask`] - Prefix-length masking arithmetic

pub mod classify;
pub mod mask;
pub mod normalize;

pub use classify::{is_address, is_dotted_string, is_integer, is_octet_sequence, is_recognized};
pub use mask::{mask, netmask_bits, MAX_LENGTH};
pub use normalize::{normalize, pack_octets, unpack_octets};
