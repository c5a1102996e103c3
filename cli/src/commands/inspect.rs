use vlsm_common::config::Config;
use vlsm_common::network::subnet::Network;

use crate::terminal::format;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};

const KEYS: [&str; 6] = ["Network", "Mask", "Boundary", "Addresses", "Usable", "Hosts"];

pub fn inspect(network: &Network, cfg: &Config) {
    let key_width: usize = KEYS.iter().map(|key| key.len()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(key_width);

    let usable = network.usable();

    print::aligned_line(KEYS[0], format::network_to_colored(network));
    print::aligned_line(KEYS[1], network.mask().to_string());
    print::aligned_line(KEYS[2], network.boundary().to_string());
    print::aligned_line(KEYS[3], network.size().to_string());
    print::aligned_line(KEYS[4], format::range_to_colored(&usable));
    print::aligned_line(KEYS[5], usable.len().to_string());

    if cfg.quiet == 0 {
        print::end_of_program();
    }
}
