use colored::*;
use vlsm_common::network::range::Ipv4Range;
use vlsm_common::network::subnet::{AllocatedSubnet, Network};
use vlsm_common::planning::ReportWriter;

use crate::mprint;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn network_to_colored(network: &Network) -> ColoredString {
    let address: ColoredString = network.base().to_string().color(colors::IPV4_ADDR);
    let prefix: ColoredString = network.prefix().to_string().color(colors::IPV4_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

pub fn range_to_colored(range: &Ipv4Range) -> ColoredString {
    if range.is_empty() {
        return "none".color(colors::SEPARATOR);
    }
    let start: ColoredString = range.start_addr.to_string().color(colors::IPV4_ADDR);
    let end: ColoredString = range.end_addr.to_string().color(colors::IPV4_ADDR);
    format!("{start} - {end}").color(colors::SEPARATOR)
}

pub fn subnet_to_details(subnet: &AllocatedSubnet) -> Vec<Detail> {
    vec![
        (
            "Mask".to_string(),
            subnet.mask().to_string().color(colors::MASK),
        ),
        (
            "Broadcast".to_string(),
            subnet.broadcast.to_string().color(colors::IPV4_ADDR),
        ),
        (
            "Pool".to_string(),
            subnet.pool_size.to_string().color(colors::POOL),
        ),
        ("Range".to_string(), range_to_colored(&subnet.pool_range)),
    ]
}

/// Prints an allocation as one tree per subnet.
pub struct TerminalReportWriter {
    quiet: u8,
}

impl TerminalReportWriter {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }

    fn print_summary(&self, parent: &Network, subnets: &[AllocatedSubnet]) {
        let used: u64 = subnets.iter().map(|s| s.network.size()).sum();
        let count: ColoredString = format!("{} subnets", subnets.len()).bold().green();
        let usage: ColoredString = format!("{used}/{}", parent.size()).bold().yellow();
        let output: &ColoredString =
            &format!("Allocation Complete: {count} using {usage} addresses")
                .color(colors::TEXT_DEFAULT);

        match self.quiet {
            0 => {
                print::fat_separator();
                print::centerln(output);
            }
            _ => {
                mprint!();
                print::print_status(output.to_string());
            }
        }
    }
}

impl ReportWriter for TerminalReportWriter {
    fn write(&mut self, parent: &Network, subnets: &[AllocatedSubnet]) -> anyhow::Result<()> {
        print::header("allocated subnets", self.quiet);

        if self.quiet < 2 {
            for (idx, subnet) in subnets.iter().enumerate() {
                print::tree_head(idx, &network_to_colored(&subnet.network).to_string());
                print::as_tree_one_level(subnet_to_details(subnet));
                if idx + 1 != subnets.len() {
                    mprint!();
                }
            }
        }

        self.print_summary(parent, subnets);
        Ok(())
    }
}
