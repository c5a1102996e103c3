//! # Subnet Sizing
//!
//! Turns a host count into the smallest power-of-two block that holds it.

use std::net::Ipv4Addr;

use vlsm_common::error::VlsmError;
use vlsm_common::network::address;
use vlsm_common::network::range::Ipv4Range;
use vlsm_common::network::subnet::{AllocatedSubnet, Network};

/// Bit length of `n`, never less than one (`0` still renders as one binary digit).
pub fn host_bits_for(n: u32) -> u8 {
    (u32::BITS - n.leading_zeros()).max(1) as u8
}

/// Assignable addresses in the smallest block holding `n` addresses (`2^b - 2`).
pub fn pool_size_for(n: u32) -> u32 {
    let bits = host_bits_for(n.saturating_sub(1));
    ((1u64 << bits) - 2) as u32
}

/// Sizes a block at `network.base()` for `effective_hosts` addresses
/// (network and broadcast included).
///
/// The mask reserves the same host bits the pool is computed from, so the
/// network, broadcast and pool range always describe one block.
pub fn size_subnet(network: Network, effective_hosts: u32) -> Result<AllocatedSubnet, VlsmError> {
    let host_bits = host_bits_for(effective_hosts.saturating_sub(1));
    let prefix = address::minimal_mask(network.prefix(), host_bits)?;

    let base: Ipv4Addr = network.base();
    let pool_size = pool_size_for(effective_hosts);
    let broadcast = address::add_offset(base, pool_size + 1);
    let pool_range = Ipv4Range::new(
        address::add_offset(base, 1),
        address::add_offset(base, pool_size),
    );

    Ok(AllocatedSubnet {
        network: Network::new(base, prefix)?,
        broadcast,
        pool_size,
        pool_range,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
