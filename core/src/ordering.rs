use vlsm_common::network::request::SubnetRequest;

/// Largest requests first; requests of equal size keep their input order.
pub fn order_requests(requests: &[SubnetRequest]) -> Vec<SubnetRequest> {
    let mut ordered: Vec<SubnetRequest> = requests.to_vec();
    ordered.sort_by(|a, b| b.hosts.cmp(&a.hosts));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlsm_common::network::request::DistributionPolicy;

    #[test]
    fn test_order_descending() {
        let requests: Vec<SubnetRequest> = [13, 97, 29, 61]
            .into_iter()
            .map(SubnetRequest::minimum)
            .collect();

        let hosts: Vec<u32> = order_requests(&requests).iter().map(|r| r.hosts).collect();
        assert_eq!(hosts, vec![97, 61, 29, 13]);
    }

    #[test]
    fn test_order_is_stable_on_ties() {
        let requests = vec![
            SubnetRequest::new(10, DistributionPolicy::Maximum),
            SubnetRequest::new(20, DistributionPolicy::Minimum),
            SubnetRequest::new(10, DistributionPolicy::Balanced),
            SubnetRequest::new(10, DistributionPolicy::Minimum),
        ];

        let ordered = order_requests(&requests);
        assert_eq!(ordered[0], requests[1]);
        assert_eq!(ordered[1], requests[0]);
        assert_eq!(ordered[2], requests[2]);
        assert_eq!(ordered[3], requests[3]);
    }

    #[test]
    fn test_order_empty() {
        assert!(order_requests(&[]).is_empty());
    }
}
