//! Error types shared across the allocator crates.

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::network::request::DistributionPolicy;

/// Reasons a request batch is rejected before anything is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("invalid subnet size = {0}, expected 1..=2147483646")]
    HostCount(u32),

    #[error("invalid number of subnets = {0}, expected 1..=2147483648")]
    SubnetCount(usize),

    #[error("subnet type '{0}' has no allocation strategy yet, use '<' (minimum)")]
    UnsupportedPolicy(DistributionPolicy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VlsmError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("invalid prefix: {0} > 32")]
    InvalidPrefix(u8),

    /// More host bits were needed than the block at the cursor has.
    #[error("network not big enough: /{prefix} cannot reserve {host_bits} host bits")]
    NetworkTooSmall { prefix: u8, host_bits: u8 },

    /// A sized block would end past the parent network's last address.
    #[error("network not big enough: no room for {hosts} hosts before {boundary}")]
    NetworkExhausted { hosts: u32, boundary: Ipv4Addr },
}
