//! # IPv4 Address Arithmetic
//!
//! Pure functions over 32-bit addresses and prefix lengths.

use std::net::Ipv4Addr;

use crate::error::VlsmError;
use crate::network::subnet::Network;

pub const IPV4_BITS: u8 = 32;

/// Adds `offset` to `address`, wrapping past `255.255.255.255` back to `0.0.0.0`.
pub fn add_offset(address: Ipv4Addr, offset: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(address).wrapping_add(offset))
}

/// Like [`add_offset`], but returns `None` instead of wrapping.
pub fn checked_offset(address: Ipv4Addr, offset: u32) -> Option<Ipv4Addr> {
    u32::from(address).checked_add(offset).map(Ipv4Addr::from)
}

/// Returns the prefix length that leaves exactly `host_bits_needed` host bits
/// inside a block that currently has a `/current_prefix` mask.
pub fn minimal_mask(current_prefix: u8, host_bits_needed: u8) -> Result<u8, VlsmError> {
    if current_prefix > IPV4_BITS {
        return Err(VlsmError::InvalidPrefix(current_prefix));
    }
    let available_host_bits: u8 = IPV4_BITS - current_prefix;

    let Some(network_bits) = available_host_bits.checked_sub(host_bits_needed) else {
        return Err(VlsmError::NetworkTooSmall {
            prefix: current_prefix,
            host_bits: host_bits_needed,
        });
    };

    Ok(current_prefix + network_bits)
}

/// Number of addresses in a `/prefix` block.
pub fn block_size(prefix: u8) -> u64 {
    1u64 << (IPV4_BITS - prefix.min(IPV4_BITS))
}

/// Last address of the block, i.e. `base + 2^(32 - prefix) - 1`.
pub fn boundary_address(network: &Network) -> Ipv4Addr {
    let last_offset = (block_size(network.prefix()) - 1) as u32;
    add_offset(network.base(), last_offset)
}

/// Converts a prefix length into a dotted subnet mask (e.g. 24 -> 255.255.255.0).
pub fn prefix_to_mask(prefix: u8) -> Ipv4Addr {
    let mask = if prefix == 0 {
        0
    } else {
        u32::MAX << (IPV4_BITS - prefix.min(IPV4_BITS))
    };
    Ipv4Addr::from(mask)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
