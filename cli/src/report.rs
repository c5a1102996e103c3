//! # Text Report
//!
//! Plain-text rendering of an allocation, written to a file.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use vlsm_common::network::subnet::{AllocatedSubnet, Network};
use vlsm_common::planning::ReportWriter;

pub fn render_report(parent: &Network, subnets: &[AllocatedSubnet]) -> String {
    let mut content = format!("Original network: {parent}\n\n");

    for (idx, subnet) in subnets.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(content, "Subnet #{idx}:");
        let _ = writeln!(content, "\tNetwork address: {}", subnet.network);
        let _ = writeln!(content, "\tSubnet mask: {}", subnet.mask());
        let _ = writeln!(content, "\tBroadcast address: {}", subnet.broadcast);
        let _ = writeln!(content, "\tPool size: {}", subnet.pool_size);
        let _ = writeln!(content, "\tPool range:");
        let _ = writeln!(content, "\t\tFrom: {}", subnet.pool_range.start_addr);
        let _ = writeln!(content, "\t\tTo: {}", subnet.pool_range.end_addr);
    }

    content
}

pub struct FileReportWriter {
    path: PathBuf,
}

impl FileReportWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportWriter for FileReportWriter {
    fn write(&mut self, parent: &Network, subnets: &[AllocatedSubnet]) -> anyhow::Result<()> {
        fs::write(&self.path, render_report(parent, subnets))
            .with_context(|| format!("unable to save output to {}", self.path.display()))?;
        info!("Check out the output file: {}", self.path.display());
        Ok(())
    }
}
