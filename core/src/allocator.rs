//! # Allocation Engine
//!
//! Walks the parent network from its first address and hands out one block per
//! request, largest request first. A run either places every request or fails
//! as a whole; partial results are never returned.

use std::net::Ipv4Addr;

use tracing::{debug, info, warn};
use vlsm_common::config::CursorMask;
use vlsm_common::error::{RequestError, VlsmError};
use vlsm_common::network::address;
use vlsm_common::network::request::{
    DistributionPolicy, MAX_REQUESTED_HOSTS, MAX_SUBNETS, SubnetRequest,
};
use vlsm_common::network::subnet::{AllocatedSubnet, Network};

use crate::ordering;
use crate::sizing;

/// Next free address and the mask the next block is sized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub address: Ipv4Addr,
    pub prefix: u8,
}

impl Cursor {
    pub fn start(parent: &Network) -> Self {
        Self {
            address: parent.base(),
            prefix: parent.prefix(),
        }
    }

    fn network(&self) -> Result<Network, VlsmError> {
        Network::new(self.address, self.prefix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationState {
    Allocating(Cursor),
    /// Every request has been placed.
    Completed,
    /// The cursor ran off the end of the address space.
    Exhausted,
}

pub struct Allocator {
    parent: Network,
    cursor_mask: CursorMask,
}

impl Allocator {
    pub fn new(parent: Network) -> Self {
        Self {
            parent,
            cursor_mask: CursorMask::default(),
        }
    }

    pub fn with_cursor_mask(mut self, cursor_mask: CursorMask) -> Self {
        self.cursor_mask = cursor_mask;
        self
    }

    pub fn parent(&self) -> &Network {
        &self.parent
    }

    /// Places every request inside the parent network.
    ///
    /// Subnets come back in increasing address order, which is also the order
    /// of the requests sorted by descending host count.
    pub fn allocate(&self, requests: &[SubnetRequest]) -> Result<Vec<AllocatedSubnet>, VlsmError> {
        validate_requests(requests)?;

        let ordered: Vec<SubnetRequest> = ordering::order_requests(requests);
        let boundary: Ipv4Addr = self.parent.boundary();
        let mut subnets: Vec<AllocatedSubnet> = Vec::with_capacity(ordered.len());
        let mut state = AllocationState::Allocating(Cursor::start(&self.parent));

        for (idx, request) in ordered.iter().enumerate() {
            let AllocationState::Allocating(cursor) = state else {
                return Err(VlsmError::NetworkExhausted {
                    hosts: request.hosts,
                    boundary,
                });
            };

            let effective_hosts = request.effective_hosts();
            let candidate = sizing::size_subnet(cursor.network()?, effective_hosts)?;

            if candidate.boundary() > boundary {
                debug!(
                    "{} for {} hosts ends past {boundary}",
                    candidate.network, request.hosts
                );
                return Err(VlsmError::NetworkExhausted {
                    hosts: request.hosts,
                    boundary,
                });
            }

            debug!(
                "Allocated {} ({} of {} hosts requested)",
                candidate.network, candidate.pool_size, request.hosts
            );

            state = self.advance(&candidate, effective_hosts, ordered.get(idx + 1))?;
            subnets.push(candidate);
        }

        info!(
            "Allocated {} subnet(s) inside {}",
            subnets.len(),
            self.parent
        );
        Ok(subnets)
    }

    fn advance(
        &self,
        placed: &AllocatedSubnet,
        effective_hosts: u32,
        next: Option<&SubnetRequest>,
    ) -> Result<AllocationState, VlsmError> {
        let Some(next) = next else {
            return Ok(AllocationState::Completed);
        };

        let Some(address) = address::checked_offset(placed.broadcast, 1) else {
            return Ok(AllocationState::Exhausted);
        };

        let prefix = match self.cursor_mask {
            CursorMask::Consumed => {
                let host_bits = sizing::host_bits_for(effective_hosts - 1);
                address::minimal_mask(placed.network.prefix(), host_bits)?
            }
            CursorMask::Upcoming => {
                let host_bits = sizing::host_bits_for(next.effective_hosts() - 1);
                address::minimal_mask(self.parent.prefix(), host_bits)?
            }
        };

        Ok(AllocationState::Allocating(Cursor { address, prefix }))
    }
}

/// Rejects batches the engine cannot run: wrong request count, host counts
/// outside `1..=2^31-2`, or a policy with no allocation strategy.
pub fn validate_requests(requests: &[SubnetRequest]) -> Result<(), VlsmError> {
    if requests.is_empty() || requests.len() > MAX_SUBNETS {
        return Err(RequestError::SubnetCount(requests.len()).into());
    }

    for request in requests {
        if request.hosts == 0 || request.hosts > MAX_REQUESTED_HOSTS {
            return Err(RequestError::HostCount(request.hosts).into());
        }
        if request.policy != DistributionPolicy::Minimum {
            warn!("Subnet type '{}' is not supported", request.policy);
            return Err(RequestError::UnsupportedPolicy(request.policy).into());
        }
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
