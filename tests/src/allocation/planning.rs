use std::cell::RefCell;
use std::rc::Rc;

use vlsm_common::config::CursorMask;
use vlsm_common::error::VlsmError;
use vlsm_common::network::request::SubnetRequest;
use vlsm_common::network::subnet::{AllocatedSubnet, Network};
use vlsm_common::planning::{AllocationPlan, ReportWriter, RequestCollector};
use vlsm_core::planner::PlanningService;

struct FixedCollector(AllocationPlan);

impl RequestCollector for FixedCollector {
    fn collect(&mut self) -> anyhow::Result<AllocationPlan> {
        Ok(self.0.clone())
    }
}

struct FailingCollector;

impl RequestCollector for FailingCollector {
    fn collect(&mut self) -> anyhow::Result<AllocationPlan> {
        anyhow::bail!("input closed")
    }
}

type Written = Rc<RefCell<Vec<(Network, Vec<AllocatedSubnet>)>>>;

struct RecordingWriter(Written);

impl ReportWriter for RecordingWriter {
    fn write(&mut self, parent: &Network, subnets: &[AllocatedSubnet]) -> anyhow::Result<()> {
        self.0.borrow_mut().push((*parent, subnets.to_vec()));
        Ok(())
    }
}

fn plan(network: &str, hosts: &[u32]) -> AllocationPlan {
    AllocationPlan::new(
        network.parse().unwrap(),
        hosts.iter().copied().map(SubnetRequest::minimum).collect(),
    )
}

#[test]
fn planning_service_writes_every_report() {
    let written: Written = Rc::new(RefCell::new(Vec::new()));
    let writers: Vec<Box<dyn ReportWriter>> = vec![
        Box::new(RecordingWriter(written.clone())),
        Box::new(RecordingWriter(written.clone())),
    ];

    let mut service = PlanningService::new(
        Box::new(FixedCollector(plan("192.168.1.0/24", &[13, 97, 61, 29]))),
        writers,
        CursorMask::Consumed,
    );
    let allocation = service.run().unwrap();

    assert_eq!(allocation.subnets.len(), 4);
    assert_eq!(allocation.parent.to_string(), "192.168.1.0/24");

    let written = written.borrow();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0].1, allocation.subnets);
    assert_eq!(written[1].0, allocation.parent);
}

#[test]
fn planning_service_skips_writers_on_failure() {
    let written: Written = Rc::new(RefCell::new(Vec::new()));
    let writers: Vec<Box<dyn ReportWriter>> = vec![Box::new(RecordingWriter(written.clone()))];

    let mut service = PlanningService::new(
        Box::new(FixedCollector(plan("192.168.1.0/26", &[50, 50]))),
        writers,
        CursorMask::Consumed,
    );
    let err = service.run().unwrap_err();

    assert!(matches!(
        err.downcast_ref::<VlsmError>(),
        Some(VlsmError::NetworkExhausted { hosts: 50, .. })
    ));
    assert!(written.borrow().is_empty());
}

#[test]
fn planning_service_propagates_collector_errors() {
    let mut service = PlanningService::new(Box::new(FailingCollector), Vec::new(), CursorMask::Upcoming);
    let err = service.run().unwrap_err();
    assert_eq!(err.to_string(), "input closed");
}
