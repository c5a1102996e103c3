use std::net::Ipv4Addr;

use vlsm_common::config::CursorMask;
use vlsm_common::error::VlsmError;
use vlsm_common::network::request::{RequestList, SubnetRequest};
use vlsm_common::network::subnet::{AllocatedSubnet, Network};
use vlsm_core::allocator::Allocator;
use vlsm_core::ordering;

/// Inputs that fit their parent network.
fn fitting_cases() -> Vec<(&'static str, &'static str)> {
    vec![
        ("192.168.1.0/24", "97,61,29,13"),
        ("192.168.1.0/24", "13,29,61,97"),
        ("10.0.0.0/8", "1"),
        ("10.0.0.0/8", "1000,1000,2,2,2,60000,5,254"),
        ("172.16.0.0/16", "3,3,3,3,3,3,3,3,3,3"),
        ("192.168.0.0/23", "200,100,50,25,12,6,2,1"),
        ("100.64.0.0/10", "2000000,2000,2000,1,70000"),
        ("0.0.0.0/0", "2147483646,1073741822"),
        ("203.0.113.0/28", "6,2,1"),
    ]
}

fn run(network: &str, sizes: &str) -> (Network, Vec<SubnetRequest>, Result<Vec<AllocatedSubnet>, VlsmError>) {
    let parent: Network = network.parse().unwrap();
    let requests: Vec<SubnetRequest> = sizes.parse::<RequestList>().unwrap().into_inner();
    let result = Allocator::new(parent).allocate(&requests);
    (parent, requests, result)
}

#[test]
fn subnets_stay_inside_parent_and_do_not_overlap() {
    for (network, sizes) in fitting_cases() {
        let (parent, _, result) = run(network, sizes);
        let subnets = result.unwrap_or_else(|e| panic!("{network} {sizes}: {e}"));

        for subnet in &subnets {
            assert!(subnet.network.base() >= parent.base(), "{network} {sizes}");
            assert!(subnet.boundary() <= parent.boundary(), "{network} {sizes}");
            assert_eq!(subnet.broadcast, subnet.boundary(), "{network} {sizes}");
        }

        for (i, a) in subnets.iter().enumerate() {
            for b in subnets.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{} overlaps {}", a.network, b.network);
            }
        }
    }
}

#[test]
fn pools_cover_requests_with_power_of_two_blocks() {
    for (network, sizes) in fitting_cases() {
        let (_, requests, result) = run(network, sizes);
        let subnets = result.unwrap();
        let ordered = ordering::order_requests(&requests);

        for (subnet, request) in subnets.iter().zip(ordered.iter()) {
            assert!(subnet.pool_size >= request.hosts);

            let block = u64::from(subnet.pool_size) + 2;
            assert!(block.is_power_of_two(), "{} is not a power of two", block);
            assert_eq!(block, subnet.network.size());
            assert_eq!(subnet.pool_range.len(), u64::from(subnet.pool_size));
        }
    }
}

#[test]
fn subnets_follow_descending_request_order() {
    for (network, sizes) in fitting_cases() {
        let (_, requests, result) = run(network, sizes);
        let subnets = result.unwrap();
        assert_eq!(subnets.len(), requests.len());

        for pair in subnets.windows(2) {
            assert!(pair[0].broadcast < pair[1].network.base());
            assert!(pair[0].pool_size >= pair[1].pool_size);
        }
    }
}

#[test]
fn allocation_is_deterministic() {
    for (network, sizes) in fitting_cases() {
        let (_, _, first) = run(network, sizes);
        let (_, _, second) = run(network, sizes);
        assert_eq!(first, second);
    }
}

#[test]
fn cursor_mask_strategies_agree_on_fitting_input() {
    for (network, sizes) in fitting_cases() {
        let (parent, requests, consumed) = run(network, sizes);
        let upcoming = Allocator::new(parent)
            .with_cursor_mask(CursorMask::Upcoming)
            .allocate(&requests);
        assert_eq!(consumed, upcoming);
    }
}

#[test]
fn class_c_boundary_scenario() {
    let (_, _, result) = run("192.168.1.0/24", "97,61,29,13");
    let subnets = result.unwrap();

    let expected = [
        ("192.168.1.0/25", [192, 168, 1, 127], 126),
        ("192.168.1.128/26", [192, 168, 1, 191], 62),
        ("192.168.1.192/27", [192, 168, 1, 223], 30),
        ("192.168.1.224/28", [192, 168, 1, 239], 14),
    ];

    for (subnet, (network, broadcast, pool)) in subnets.iter().zip(expected) {
        assert_eq!(subnet.network.to_string(), network);
        assert_eq!(subnet.broadcast, Ipv4Addr::from(broadcast));
        assert_eq!(subnet.pool_size, pool);
    }
}

#[test]
fn exhaustion_is_all_or_nothing() {
    let (_, _, result) = run("192.168.1.0/30", "100");
    assert!(matches!(
        result,
        Err(VlsmError::NetworkTooSmall { .. } | VlsmError::NetworkExhausted { .. })
    ));

    let (_, _, result) = run("192.168.1.0/25", "60,60,1");
    assert!(matches!(result, Err(VlsmError::NetworkExhausted { hosts: 1, .. })));
}

#[test]
fn single_host_request() {
    let (_, _, result) = run("10.0.0.0/8", "1");
    let subnet = result.unwrap()[0];

    assert_eq!(subnet.pool_size, 2);
    assert_eq!(
        u32::from(subnet.broadcast),
        u32::from(subnet.network.base()) + subnet.pool_size + 1
    );
}
