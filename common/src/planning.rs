//! # Planning Ports
//!
//! Boundaries between the allocation engine and the outside world.
//! The engine never reads input or writes output itself; it is handed an
//! [`AllocationPlan`] by a [`RequestCollector`] and its result is passed to
//! one or more [`ReportWriter`]s.

use crate::network::request::SubnetRequest;
use crate::network::subnet::{AllocatedSubnet, Network};

/// Everything the engine needs for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    pub parent: Network,
    pub requests: Vec<SubnetRequest>,
}

impl AllocationPlan {
    pub fn new(parent: Network, requests: Vec<SubnetRequest>) -> Self {
        Self { parent, requests }
    }
}

/// Produces the parent network and the list of requests to allocate.
pub trait RequestCollector {
    fn collect(&mut self) -> anyhow::Result<AllocationPlan>;
}

/// Serializes a finished allocation somewhere (terminal, file, ...).
pub trait ReportWriter {
    fn write(&mut self, parent: &Network, subnets: &[AllocatedSubnet]) -> anyhow::Result<()>;
}
