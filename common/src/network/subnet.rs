//! # Subnet Models
//!
//! [`Network`] is a CIDR block, [`AllocatedSubnet`] is one block handed out
//! by the allocator together with its broadcast address and host pool.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::VlsmError;
use crate::network::address::{self, IPV4_BITS};
use crate::network::range::{self, Ipv4Range};

/// A CIDR block. The base address is kept exactly as given, use
/// [`Network::containing`] or `FromStr` to get a normalized block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    base: Ipv4Addr,
    prefix: u8,
}

impl Network {
    pub fn new(base: Ipv4Addr, prefix: u8) -> Result<Self, VlsmError> {
        if prefix > IPV4_BITS {
            return Err(VlsmError::InvalidPrefix(prefix));
        }
        Ok(Self { base, prefix })
    }

    /// The block of size `/prefix` that `addr` belongs to.
    pub fn containing(addr: Ipv4Addr, prefix: u8) -> Result<Self, VlsmError> {
        let net = Ipv4Network::new(addr, prefix).map_err(|_| VlsmError::InvalidPrefix(prefix))?;
        Self::new(net.network(), prefix)
    }

    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> Ipv4Addr {
        address::prefix_to_mask(self.prefix)
    }

    pub fn boundary(&self) -> Ipv4Addr {
        address::boundary_address(self)
    }

    pub fn size(&self) -> u64 {
        address::block_size(self.prefix)
    }

    /// Every address of the block, network and broadcast included.
    pub fn span(&self) -> Ipv4Range {
        Ipv4Range::new(self.base, self.boundary())
    }

    /// Addresses assignable to hosts, i.e. the span minus network and broadcast.
    pub fn usable(&self) -> Ipv4Range {
        let start = u32::from(self.base).saturating_add(1);
        let end = u32::from(self.boundary()).saturating_sub(1);
        Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl FromStr for Network {
    type Err = String;

    /// Parses CIDR notation like "192.168.1.0/24".
    ///
    /// Host bits are cleared, so "192.168.1.77/24" yields `192.168.1.0/24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.trim().split_once('/') else {
            return Err(format!("invalid network '{s}': expected CIDR notation (a.b.c.d/p)"));
        };

        let ipv4_addr = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|e| format!("Invalid IP in CIDR '{ip_str}': {e}"))?;

        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|e| format!("Invalid prefix in CIDR '{prefix_str}': {e}"))?;

        let span = range::cidr_range(ipv4_addr, prefix).map_err(|e| e.to_string())?;

        Network::new(span.start_addr, prefix).map_err(|e| e.to_string())
    }
}

/// One block handed out by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedSubnet {
    pub network: Network,
    pub broadcast: Ipv4Addr,
    /// Number of assignable addresses, always `2^k - 2`.
    pub pool_size: u32,
    pub pool_range: Ipv4Range,
}

impl AllocatedSubnet {
    pub fn mask(&self) -> Ipv4Addr {
        self.network.mask()
    }

    pub fn boundary(&self) -> Ipv4Addr {
        self.network.boundary()
    }

    pub fn overlaps(&self, other: &AllocatedSubnet) -> bool {
        self.network.base() <= other.boundary() && other.network.base() <= self.boundary()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
