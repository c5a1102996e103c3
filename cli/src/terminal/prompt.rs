//! # Interactive Prompts
//!
//! Collects whatever the command line left out by asking on the terminal.
//! Every question has a default, taken on an empty answer or when input is
//! disabled.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;
use vlsm_common::error::RequestError;
use vlsm_common::network::request::{
    DistributionPolicy, MAX_REQUESTED_HOSTS, MAX_SUBNETS, SubnetRequest,
};
use vlsm_common::network::subnet::Network;
use vlsm_common::planning::{AllocationPlan, RequestCollector};

pub const DEFAULT_NETWORK: &str = "10.0.0.0/8";
pub const DEFAULT_SUBNET_COUNT: &str = "1";
pub const DEFAULT_SUBNET_SIZE: &str = "1";
pub const DEFAULT_SUBNET_TYPE: &str = "<";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Line-based question/answer over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    disable_input: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, disable_input: bool) -> Self {
        Self {
            input,
            output,
            disable_input,
        }
    }

    /// Asks `Enter {question} ({default}): ` and returns the trimmed answer.
    pub fn ask(&mut self, question: &str, default: &str) -> anyhow::Result<String> {
        if self.disable_input {
            return Ok(default.to_string());
        }

        write!(self.output, "Enter {question} ({default}): ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?;

        let answer = line.trim();
        if read == 0 || answer.is_empty() {
            return Ok(default.to_string());
        }
        Ok(answer.to_string())
    }

    pub fn say(&mut self, line: &str) -> anyhow::Result<()> {
        if !self.disable_input {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    pub fn ask_output_file(&mut self) -> anyhow::Result<PathBuf> {
        let answer = self.ask("the output file name", DEFAULT_OUTPUT_FILE)?;
        Ok(PathBuf::from(answer))
    }
}

/// [`RequestCollector`] that fills the gaps in the command-line presets.
pub struct PromptCollector<R, W> {
    prompt: Prompt<R, W>,
    network: Option<Network>,
    requests: Option<Vec<SubnetRequest>>,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(prompt: Prompt<R, W>) -> Self {
        Self {
            prompt,
            network: None,
            requests: None,
        }
    }

    pub fn with_network(mut self, network: Option<Network>) -> Self {
        self.network = network;
        self
    }

    pub fn with_requests(mut self, requests: Option<Vec<SubnetRequest>>) -> Self {
        self.requests = requests;
        self
    }

    fn ask_network(&mut self) -> anyhow::Result<Network> {
        let answer = self
            .prompt
            .ask("IPv4 network address in CIDR format", DEFAULT_NETWORK)?;
        answer.parse::<Network>().map_err(anyhow::Error::msg)
    }

    fn ask_number_of_subnets(&mut self) -> anyhow::Result<usize> {
        let answer = self
            .prompt
            .ask("the number of subnets", DEFAULT_SUBNET_COUNT)?;
        let count = answer
            .parse::<usize>()
            .with_context(|| format!("invalid number of subnets '{answer}'"))?;

        if !(1..=MAX_SUBNETS).contains(&count) {
            return Err(RequestError::SubnetCount(count).into());
        }
        Ok(count)
    }

    fn ask_subnet(&mut self, counter: usize) -> anyhow::Result<SubnetRequest> {
        self.prompt.say(&format!("=== Subnet #{} ===", counter + 1))?;

        let answer = self.prompt.ask(
            "subnet size or \u{201c}number of assignable addresses\u{201d}",
            DEFAULT_SUBNET_SIZE,
        )?;
        let hosts = answer
            .parse::<u32>()
            .with_context(|| format!("invalid subnet size '{answer}'"))?;

        if !(1..=MAX_REQUESTED_HOSTS).contains(&hosts) {
            return Err(RequestError::HostCount(hosts).into());
        }

        let answer = self.prompt.ask(
            "subnet type minimum|balanced|maximum [<|=|>]",
            DEFAULT_SUBNET_TYPE,
        )?;
        let policy = answer
            .parse::<DistributionPolicy>()
            .map_err(anyhow::Error::msg)?;

        Ok(SubnetRequest::new(hosts, policy))
    }
}

impl<R: BufRead, W: Write> RequestCollector for PromptCollector<R, W> {
    fn collect(&mut self) -> anyhow::Result<AllocationPlan> {
        let parent = match self.network {
            Some(network) => network,
            None => self.ask_network()?,
        };

        let requests = match self.requests.take() {
            Some(requests) => requests,
            None => {
                let count = self.ask_number_of_subnets()?;
                (0..count)
                    .map(|counter| self.ask_subnet(counter))
                    .collect::<anyhow::Result<Vec<SubnetRequest>>>()?
            }
        };

        debug!("Collected {} request(s) for {parent}", requests.len());
        Ok(AllocationPlan::new(parent, requests))
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> PromptCollector<Cursor<Vec<u8>>, Vec<u8>> {
        let prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        PromptCollector::new(prompt)
    }

    #[test]
    fn test_prompt_defaults_on_empty_answers() {
        let mut collector = collector("\n\n\n\n");
        let plan = collector.collect().unwrap();

        assert_eq!(plan.parent.to_string(), "10.0.0.0/8");
        assert_eq!(plan.requests, vec![SubnetRequest::minimum(1)]);
    }

    #[test]
    fn test_prompt_defaults_on_closed_input() {
        let plan = collector("").collect().unwrap();
        assert_eq!(plan.parent.to_string(), DEFAULT_NETWORK);
        assert_eq!(plan.requests.len(), 1);
    }

    #[test]
    fn test_prompt_reads_answers() {
        let mut collector = collector("192.168.1.0/24\n2\n97\n<\n13\nmaximum\n");
        let plan = collector.collect().unwrap();

        assert_eq!(plan.parent.to_string(), "192.168.1.0/24");
        assert_eq!(
            plan.requests,
            vec![
                SubnetRequest::minimum(97),
                SubnetRequest::new(13, DistributionPolicy::Maximum)
            ]
        );

        let transcript = String::from_utf8(collector.prompt.output.clone()).unwrap();
        assert!(transcript.contains("Enter IPv4 network address in CIDR format (10.0.0.0/8): "));
        assert!(transcript.contains("=== Subnet #2 ==="));
    }

    #[test]
    fn test_presets_skip_prompts() {
        let mut collector = collector("")
            .with_network(Some("172.16.0.0/12".parse().unwrap()))
            .with_requests(Some(vec![SubnetRequest::minimum(500)]));
        let plan = collector.collect().unwrap();

        assert_eq!(plan.parent.to_string(), "172.16.0.0/12");
        assert_eq!(plan.requests, vec![SubnetRequest::minimum(500)]);
        assert!(collector.prompt.output.is_empty());
    }

    #[test]
    fn test_disabled_input_uses_defaults() {
        let prompt = Prompt::new(Cursor::new(b"192.168.0.0/16\n".to_vec()), Vec::new(), true);
        let plan = PromptCollector::new(prompt).collect().unwrap();
        assert_eq!(plan.parent.to_string(), DEFAULT_NETWORK);
    }

    #[test]
    fn test_prompt_rejects_invalid_answers() {
        assert!(collector("not-a-network\n").collect().is_err());
        assert!(collector("10.0.0.0/8\n0\n").collect().is_err());
        assert!(collector("10.0.0.0/8\nmany\n").collect().is_err());
        assert!(collector("10.0.0.0/8\n1\n0\n").collect().is_err());
        assert!(collector("10.0.0.0/8\n1\n2147483647\n").collect().is_err());
        assert!(collector("10.0.0.0/8\n1\n5\n?\n").collect().is_err());
    }

    #[test]
    fn test_ask_output_file() {
        let mut prompt = Prompt::new(Cursor::new(b"\n".to_vec()), Vec::new(), false);
        assert_eq!(prompt.ask_output_file().unwrap(), PathBuf::from("output.txt"));

        let mut prompt = Prompt::new(Cursor::new(b"plan.txt\n".to_vec()), Vec::new(), false);
        assert_eq!(prompt.ask_output_file().unwrap(), PathBuf::from("plan.txt"));
    }
}
