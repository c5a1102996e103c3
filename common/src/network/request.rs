//! # Subnet Requests
//!
//! Parsing and representing what the caller asks the allocator for.
//!
//! A single request is written as a host count with an optional policy:
//! * `97` (minimum policy)
//! * `97:<`, `97:=`, `97:>`
//! * `97:balanced`
//!
//! A [`RequestList`] is a comma-separated list of those (e.g. `97,61,29:<,13`).

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Largest number of usable hosts a single request may ask for.
pub const MAX_REQUESTED_HOSTS: u32 = 2_147_483_646;
/// Largest number of requests a single run accepts.
pub const MAX_SUBNETS: usize = 1 << 31;

/// How leftover space around a request should be distributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistributionPolicy {
    /// The smallest block that fits the request.
    #[default]
    Minimum,
    Balanced,
    Maximum,
}

impl DistributionPolicy {
    pub fn symbol(&self) -> char {
        match self {
            DistributionPolicy::Minimum => '<',
            DistributionPolicy::Balanced => '=',
            DistributionPolicy::Maximum => '>',
        }
    }
}

impl fmt::Display for DistributionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for DistributionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<" | "min" | "minimum" => Ok(DistributionPolicy::Minimum),
            "=" | "balanced" => Ok(DistributionPolicy::Balanced),
            ">" | "max" | "maximum" => Ok(DistributionPolicy::Maximum),
            other => Err(format!(
                "invalid subnet type '{other}', expected minimum|balanced|maximum [<|=|>]"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetRequest {
    /// Usable host addresses wanted, network and broadcast excluded.
    pub hosts: u32,
    pub policy: DistributionPolicy,
}

impl SubnetRequest {
    pub fn new(hosts: u32, policy: DistributionPolicy) -> Self {
        Self { hosts, policy }
    }

    pub fn minimum(hosts: u32) -> Self {
        Self::new(hosts, DistributionPolicy::Minimum)
    }

    /// Host count including the network and broadcast addresses.
    pub fn effective_hosts(&self) -> u32 {
        self.hosts.saturating_add(2)
    }
}

impl FromStr for SubnetRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (hosts_str, policy) = match s.split_once(':') {
            Some((hosts_str, policy_str)) => (hosts_str, policy_str.parse::<DistributionPolicy>()?),
            None => (s, DistributionPolicy::default()),
        };

        let hosts = hosts_str
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid subnet size '{hosts_str}': {e}"))?;

        Ok(SubnetRequest { hosts, policy })
    }
}

impl fmt::Display for SubnetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hosts, self.policy)
    }
}

/// A comma-separated list of requests, e.g. "97,61,29:<,13".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestList(pub Vec<SubnetRequest>);

impl RequestList {
    pub fn into_inner(self) -> Vec<SubnetRequest> {
        self.0
    }
}

impl Deref for RequestList {
    type Target = [SubnetRequest];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for RequestList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut requests = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let request = SubnetRequest::from_str(part)
                .map_err(|e| format!("Failed to parse subnet '{part}': {e}"))?;

            requests.push(request);
        }

        if requests.is_empty() {
            return Err(format!("no subnet sizes found in '{s}'"));
        }

        Ok(RequestList(requests))
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
