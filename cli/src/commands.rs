pub mod allocate;
pub mod inspect;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use vlsm_common::config::CursorMask;
use vlsm_common::network::request::RequestList;
use vlsm_common::network::subnet::Network;

#[derive(Parser)]
#[command(name = "vlsm")]
#[command(about = "A variable-length subnet mask allocator.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce terminal output (repeat for less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Never prompt, use defaults for anything not given
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Mask the cursor is sized against after each block: consumed|upcoming
    #[arg(long, global = true, default_value = "consumed")]
    pub cursor_mask: CursorMask,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Carve subnets out of a parent network
    #[command(alias = "a")]
    Allocate {
        /// Parent network in CIDR notation, e.g. 192.168.1.0/24
        network: Option<Network>,
        /// Comma-separated host counts, e.g. 97,61,29,13 or 97:<,61:<
        #[arg(short, long)]
        sizes: Option<RequestList>,
        /// File the text report is written to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show mask, boundary and host range of a network
    #[command(alias = "i")]
    Inspect { network: Network },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
