//! Domain models for the IPv4 calculator.
//!
//! - [`Ipv4Address`] - IPv4 address with optional explicit prefix
//! - [`PrefixSpec`] - canonical prefix-length/netmask representation
//! - [`NetworkClass`] - historical A-E address classes

mod class;
mod ipv4;

// Re-export public types
pub use class::{default_netmask, NetworkClass};
pub use ipv4::{
    cidr_to_mask, dotted, mask_to_cidr, to_binary, Ipv4Address, Ipv4Error, PrefixSpec,
    IPV4_PATTERN, IPV4_REGEX, MAX_LENGTH,
};
