use std::io;
use std::path::PathBuf;

use vlsm_common::config::Config;
use vlsm_common::network::request::RequestList;
use vlsm_common::network::subnet::Network;
use vlsm_common::planning::{ReportWriter, RequestCollector};
use vlsm_core::planner::{Allocation, PlanningService};

use crate::report::FileReportWriter;
use crate::terminal::format::TerminalReportWriter;
use crate::terminal::print;
use crate::terminal::prompt::{Prompt, PromptCollector};

pub fn allocate(
    network: Option<Network>,
    sizes: Option<RequestList>,
    output: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<()> {
    // The collector holds the stdin lock until the service is dropped
    let allocation: Allocation = {
        let prompt = Prompt::new(io::stdin().lock(), io::stdout(), cfg.disable_input);
        let collector: Box<dyn RequestCollector> = Box::new(
            PromptCollector::new(prompt)
                .with_network(network)
                .with_requests(sizes.map(RequestList::into_inner)),
        );
        let writers: Vec<Box<dyn ReportWriter>> = vec![Box::new(TerminalReportWriter::new(cfg.quiet))];

        PlanningService::new(collector, writers, cfg.cursor_mask).run()?
    };

    let path: PathBuf = match output {
        Some(path) => path,
        None => Prompt::new(io::stdin().lock(), io::stdout(), cfg.disable_input).ask_output_file()?,
    };

    FileReportWriter::new(path).write(&allocation.parent, &allocation.subnets)?;

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}
