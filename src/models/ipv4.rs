//! IPv4 address model with prefix/netmask derivation.
//!
//! Provides [`Ipv4Address`], an immutable 4-octet address carrying an
//! optional [`PrefixSpec`] override, plus the pure queries derived from
//! the pair (network, broadcast, host range, host count, wildcard).

use crate::models::class::{default_netmask, NetworkClass};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Full-match pattern for dot-decimal IPv4 notation (each octet 0-255).
pub const IPV4_PATTERN: &str =
    r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$";

lazy_static! {
    /// Compiled dot-decimal address matcher, shared with the CLI validator.
    pub static ref IPV4_REGEX: Regex = Regex::new(IPV4_PATTERN).expect("Invalid Regex?");
}

/// Errors raised at construction or mutation time.
///
/// Derived queries never fail; they return `None` when their
/// preconditions are unmet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    #[error("'{0}' is not a valid IPv4 address")]
    InvalidAddress(String),
    #[error("prefix length {0} is out of range, must be between 0 and 32")]
    InvalidPrefix(u8),
    #[error("invalid netmask: {0}")]
    InvalidMask(String),
}

/// Convert a prefix length to a subnet mask in big-endian byte form.
///
/// # Examples
/// ```
/// use ipcalc::models::cidr_to_mask;
/// assert_eq!(cidr_to_mask(24).unwrap(), [255, 255, 255, 0]);
/// ```
pub fn cidr_to_mask(len: u8) -> Result<[u8; 4], Ipv4Error> {
    if len > MAX_LENGTH {
        Err(Ipv4Error::InvalidPrefix(len))
    } else {
        Ok(mask_bits(len).to_be_bytes())
    }
}

/// Top-`len`-bits-set mask value. Caller guarantees `len <= 32`.
fn mask_bits(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH);
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a subnet mask to its prefix length.
///
/// Rejects masks whose set bits are not a single contiguous high-order
/// run (e.g. `255.0.255.0`), since every other derivation in this module
/// assumes a clean network/host split.
pub fn mask_to_cidr(mask: [u8; 4]) -> Result<u8, Ipv4Error> {
    let bits = u32::from_be_bytes(mask);
    if bits.leading_ones() + bits.trailing_zeros() != 32 {
        return Err(Ipv4Error::InvalidMask(format!(
            "{} is not a contiguous netmask",
            dotted(mask)
        )));
    }
    Ok(bits.count_ones() as u8)
}

/// Render 4 bytes in dot-decimal form.
pub fn dotted(bytes: [u8; 4]) -> String {
    bytes.iter().map(ToString::to_string).join(".")
}

/// Render 4 bytes as four zero-padded 8-bit binary groups.
///
/// # Examples
/// ```
/// use ipcalc::models::to_binary;
/// assert_eq!(to_binary([255, 255, 255, 0]), "11111111.11111111.11111111.00000000");
/// ```
pub fn to_binary(bytes: [u8; 4]) -> String {
    bytes.iter().map(|b| format!("{b:08b}")).join(".")
}

/// Explicit prefix override, in exactly one canonical form at a time.
///
/// Both forms convert losslessly to the other: the `Cidr` variant is
/// range-checked and the `Mask` variant is contiguity-checked at
/// construction, so the conversions here never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefixSpec {
    /// Prefix length in `[0, 32]`.
    Cidr(u8),
    /// Contiguous high-order netmask.
    Mask([u8; 4]),
}

impl PrefixSpec {
    pub fn from_cidr(len: u8) -> Result<PrefixSpec, Ipv4Error> {
        if len > MAX_LENGTH {
            Err(Ipv4Error::InvalidPrefix(len))
        } else {
            Ok(PrefixSpec::Cidr(len))
        }
    }

    pub fn from_mask(mask: &[u8]) -> Result<PrefixSpec, Ipv4Error> {
        let mask: [u8; 4] = mask.try_into().map_err(|_| {
            Ipv4Error::InvalidMask(format!("expected 4 bytes, got {}", mask.len()))
        })?;
        mask_to_cidr(mask)?;
        Ok(PrefixSpec::Mask(mask))
    }

    /// Prefix length of either form.
    pub fn cidr(&self) -> u8 {
        match *self {
            PrefixSpec::Cidr(len) => len,
            PrefixSpec::Mask(mask) => u32::from_be_bytes(mask).count_ones() as u8,
        }
    }

    /// Netmask bytes of either form.
    pub fn mask(&self) -> [u8; 4] {
        match *self {
            PrefixSpec::Cidr(len) => mask_bits(len).to_be_bytes(),
            PrefixSpec::Mask(mask) => mask,
        }
    }
}

/// IPv4 address with an optional explicit prefix.
///
/// The octets are immutable once constructed; the prefix slot holds the
/// last explicitly written form (length or mask) and falls back to the
/// classful default derived from the first octet when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address {
    bytes: [u8; 4],
    prefix: Option<PrefixSpec>,
}

impl Ipv4Address {
    pub fn new(bytes: [u8; 4]) -> Ipv4Address {
        Ipv4Address {
            bytes,
            prefix: None,
        }
    }

    /// Build from a byte slice, which must hold exactly 4 octets.
    pub fn from_slice(bytes: &[u8]) -> Result<Ipv4Address, Ipv4Error> {
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| {
            Ipv4Error::InvalidAddress(format!("expected 4 bytes, got {}", bytes.len()))
        })?;
        Ok(Ipv4Address::new(bytes))
    }

    pub fn bytes(&self) -> [u8; 4] {
        self.bytes
    }

    /// Effective prefix length: the explicit one if set, else the
    /// classful default (absent for loopback and classes D/E).
    pub fn cidr(&self) -> Option<u8> {
        match self.prefix {
            Some(spec) => Some(spec.cidr()),
            None => default_netmask(self.bytes[0]).map(|(cidr, _)| cidr),
        }
    }

    /// Store an explicit prefix length, replacing any stored mask.
    pub fn set_cidr(&mut self, len: u8) -> Result<(), Ipv4Error> {
        self.prefix = Some(PrefixSpec::from_cidr(len)?);
        Ok(())
    }

    /// Effective netmask: the explicit one if set, else the classful
    /// default (absent for loopback and classes D/E).
    pub fn netmask(&self) -> Option<[u8; 4]> {
        match self.prefix {
            Some(spec) => Some(spec.mask()),
            None => default_netmask(self.bytes[0]).map(|(_, mask)| mask),
        }
    }

    /// Store an explicit netmask, replacing any stored prefix length.
    ///
    /// The mask must be exactly 4 bytes with a contiguous high-order run
    /// of set bits; its population count becomes the effective prefix
    /// length.
    pub fn set_netmask(&mut self, mask: &[u8]) -> Result<(), Ipv4Error> {
        self.prefix = Some(PrefixSpec::from_mask(mask)?);
        Ok(())
    }

    /// RFC 3021 point-to-point link (/31): both addresses are hosts and
    /// there is no network or broadcast identifier.
    pub fn is_point_to_point(&self) -> bool {
        self.cidr() == Some(31)
    }

    /// Host route (/32): the address is its own first and last host.
    pub fn is_host_prefix(&self) -> bool {
        self.cidr() == Some(32)
    }

    /// Per-byte complement of the effective netmask.
    pub fn wildcard_mask(&self) -> Option<[u8; 4]> {
        self.netmask()
            .map(|mask| (!u32::from_be_bytes(mask)).to_be_bytes())
    }

    /// Address with all host bits cleared. Absent for /31 and /32
    /// networks, which have no distinct network identifier.
    pub fn network_address(&self) -> Option<Ipv4Address> {
        if self.is_point_to_point() || self.is_host_prefix() {
            return None;
        }
        let mask = self.netmask()?;
        let bits = u32::from_be_bytes(self.bytes) & u32::from_be_bytes(mask);
        Some(Ipv4Address::new(bits.to_be_bytes()))
    }

    /// Address with all host bits set. Absent for /31 and /32 networks.
    pub fn broadcast_address(&self) -> Option<Ipv4Address> {
        if self.is_point_to_point() || self.is_host_prefix() {
            return None;
        }
        let wildcard = self.wildcard_mask()?;
        let bits = u32::from_be_bytes(self.bytes) | u32::from_be_bytes(wildcard);
        Some(Ipv4Address::new(bits.to_be_bytes()))
    }

    /// Lowest usable host address in the network.
    pub fn first_host(&self) -> Option<Ipv4Address> {
        if self.is_host_prefix() {
            return Some(Ipv4Address::new(self.bytes));
        }
        let mask = self.netmask()?;
        let mut bits = u32::from_be_bytes(self.bytes) & u32::from_be_bytes(mask);
        if !self.is_point_to_point() {
            // Network address + 1; at /30 or wider the masked value has
            // host bits clear, so this cannot overflow.
            bits += 1;
        }
        Some(Ipv4Address::new(bits.to_be_bytes()))
    }

    /// Highest usable host address in the network.
    pub fn last_host(&self) -> Option<Ipv4Address> {
        if self.is_host_prefix() {
            return Some(Ipv4Address::new(self.bytes));
        }
        let wildcard = self.wildcard_mask()?;
        let mut bits = u32::from_be_bytes(self.bytes) | u32::from_be_bytes(wildcard);
        if !self.is_point_to_point() {
            // Broadcast - 1; at /30 or wider the host bits are all set.
            bits -= 1;
        }
        Some(Ipv4Address::new(bits.to_be_bytes()))
    }

    /// Count of usable host addresses: 2 for /31, 1 for /32, otherwise
    /// `2^(32-prefix) - 2` (network and broadcast excluded).
    pub fn hosts_in_network(&self) -> Option<u64> {
        let cidr = self.cidr()?;
        Some(match cidr {
            31 => 2,
            32 => 1,
            _ => (1u64 << (MAX_LENGTH - cidr)) - 2,
        })
    }

    /// Historical class of the address, from the first octet only.
    pub fn network_class(&self) -> Option<NetworkClass> {
        NetworkClass::of(self.bytes[0])
    }

    /// Zero-padded binary rendering of the octets.
    pub fn to_binary(&self) -> String {
        to_binary(self.bytes)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", dotted(self.bytes))
    }
}

impl FromStr for Ipv4Address {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Ipv4Address, Ipv4Error> {
        if !IPV4_REGEX.is_match(s) {
            return Err(Ipv4Error::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; 4];
        for (slot, part) in bytes.iter_mut().zip(s.split('.')) {
            *slot = part
                .parse()
                .map_err(|_| Ipv4Error::InvalidAddress(s.to_string()))?;
        }
        Ok(Ipv4Address { bytes, prefix: None })
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let s = match self.prefix {
            Some(spec) => format!("{}/{}", self, spec.cidr()),
            None => self.to_string(),
        };
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        let mut addr = Ipv4Address::from_str(parts[0])
            .map_err(|e| de::Error::custom(e.to_string()))?;
        match parts.len() {
            1 => {}
            2 => {
                let cidr = u8::from_str(parts[1]).map_err(|_| {
                    de::Error::custom(format!("invalid prefix length: {}", parts[1]))
                })?;
                addr.set_cidr(cidr)
                    .map_err(|e| de::Error::custom(e.to_string()))?;
            }
            _ => return Err(de::Error::custom(format!("invalid CIDR format: {s}"))),
        }
        Ok(addr)
    }
}
