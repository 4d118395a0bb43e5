//! IPv4 CIDR block utilities.
//!
//! Provides [`CidrBlock`] for representing an IPv4 network prefix, along with
//! the bit helpers used to split a block into equally sized sub-blocks.

use crate::error::PlanError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vpc_subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::invalid_config(format!(
            "prefix length /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Smallest `b` such that `2^b >= count`. Zero for a count of 0 or 1.
pub fn bits_for(count: usize) -> u8 {
    if count <= 1 {
        0
    } else {
        (usize::BITS - (count - 1).leading_zeros()) as u8
    }
}

/// IPv4 network prefix: address plus prefix length (0-32).
///
/// Host bits beyond the prefix are kept exactly as parsed.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from a CIDR string (e.g. "10.0.0.0/16").
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, PlanError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| PlanError::invalid_config(format!("invalid CIDR '{addr_cidr}'")))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| PlanError::invalid_config(format!("invalid address '{addr}'")))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| PlanError::invalid_config(format!("invalid prefix '{prefix}'")))?;
        if prefix > MAX_LENGTH {
            return Err(PlanError::invalid_config(format!(
                "prefix length /{prefix} is longer than /{MAX_LENGTH}"
            )));
        }
        Ok(CidrBlock { addr, prefix })
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        // prefix is validated on construction, the mask is always defined
        cut_addr(self.addr, self.prefix).unwrap_or(self.addr)
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix).unwrap_or(self.addr)
    }

    /// Total number of addresses covered by the block.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix.min(MAX_LENGTH))
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// True when the two blocks share at least one address.
    pub fn overlaps(&self, other: &CidrBlock) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }

    /// The `index`-th sub-block after extending the prefix by `new_bits`.
    ///
    /// Bits `[prefix, prefix + new_bits)` of the address are replaced by the
    /// big-endian encoding of `index`; every other bit is left as in `self`.
    pub fn subnet(&self, new_bits: u8, index: u32) -> Result<CidrBlock, PlanError> {
        let prefix = self.prefix as u32 + new_bits as u32;
        if prefix > MAX_LENGTH as u32 {
            return Err(PlanError::PrefixExhausted {
                base: *self,
                new_bits,
            });
        }
        if new_bits < 32 && (index as u64) >= (1u64 << new_bits) {
            return Err(PlanError::invalid_config(format!(
                "sub-block #{index} does not fit in {new_bits} bits"
            )));
        }
        if new_bits == 0 {
            return Ok(*self);
        }

        let shift = MAX_LENGTH as u32 - prefix;
        let field = ((1u64 << new_bits) - 1) << shift;
        let bits = u32::from(self.addr) as u64;
        let addr = (bits & !field) | ((index as u64) << shift);

        Ok(CidrBlock {
            addr: Ipv4Addr::from(addr as u32),
            prefix: prefix as u8,
        })
    }
}

impl FromStr for CidrBlock {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::new(s)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
