//! # Subnet Planning Service
//!
//! Implements the "plan a network" use case.
//!
//! The service pulls an [`AllocationPlan`] from a [`RequestCollector`], runs the
//! [`Allocator`] on it and hands the result to every configured [`ReportWriter`].

use tracing::info;
use vlsm_common::config::CursorMask;
use vlsm_common::network::subnet::{AllocatedSubnet, Network};
use vlsm_common::planning::{AllocationPlan, ReportWriter, RequestCollector};

use crate::allocator::Allocator;

/// A finished run: the parent network and the blocks carved out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub parent: Network,
    pub subnets: Vec<AllocatedSubnet>,
}

/// Application Service for subnet planning.
///
/// Orchestrates a run by:
/// 1. collecting the parent network and requests through the [`RequestCollector`] trait.
/// 2. allocating the requests with the engine.
/// 3. writing the result through each [`ReportWriter`].
pub struct PlanningService {
    collector: Box<dyn RequestCollector>,
    writers: Vec<Box<dyn ReportWriter>>,
    cursor_mask: CursorMask,
}

impl PlanningService {
    pub fn new(
        collector: Box<dyn RequestCollector>,
        writers: Vec<Box<dyn ReportWriter>>,
        cursor_mask: CursorMask,
    ) -> Self {
        Self {
            collector,
            writers,
            cursor_mask,
        }
    }

    /// Runs the whole pipeline once.
    ///
    /// Writers are only invoked when every request could be placed.
    pub fn run(&mut self) -> anyhow::Result<Allocation> {
        let AllocationPlan { parent, requests } = self.collector.collect()?;
        info!(
            "Allocating {} subnet(s) inside {parent}",
            requests.len()
        );

        let subnets = Allocator::new(parent)
            .with_cursor_mask(self.cursor_mask)
            .allocate(&requests)?;

        for writer in self.writers.iter_mut() {
            writer.write(&parent, &subnets)?;
        }

        Ok(Allocation { parent, subnets })
    }
}
