use clap::Parser;

use crate::domain::probe::{Config, IpVersion};
use crate::fmt::OutputFormat;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "pingwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe a host with the system ping and run a hook command when it stops answering")]
#[command(long_about = Some(
    "Repeatedly ping a target from the CLI and react to failures.\n\
     \n\
     Examples:\n\
       pingwatch example.com\n\
       pingwatch -t 5000 -i 5 example.com\n\
       pingwatch -H 'notify-send down' --format json 192.0.2.1\n\
     \n\
     The hook command receives a JSON context object on stdin."
))]
pub struct Args {
    /// Target hostname or IP
    #[arg(index = 1)]
    pub target: String,

    /// Per-probe timeout in milliseconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Seconds between probes
    #[arg(short = 'i', long)]
    pub interval: Option<u32>,

    /// Hook command to run on failure, whitespace-split into argv
    #[arg(short = 'H', long)]
    pub hook: Option<String>,

    /// Force IPv4
    #[arg(short = '4')]
    pub ipv4: bool,

    /// Force IPv6
    #[arg(short = '6')]
    pub ipv6: bool,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Alias for JSON output
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", alias = "nocolor")]
    pub no_color: bool,
}

impl Args {
    /// Freeze the parsed arguments into the immutable probe configuration.
    pub fn to_config(&self) -> Config {
        let ip_version = match (self.ipv4, self.ipv6) {
            (true, true) => IpVersion::Unspecified, // conflicting, let the system decide
            (true, false) => IpVersion::V4,
            (false, true) => IpVersion::V6,
            (false, false) => IpVersion::Unspecified,
        };
        Config {
            target: self.target.clone(),
            hook: split_hook(self.hook.as_deref().unwrap_or("")),
            timeout_ms: self.timeout,
            interval_secs: self.interval,
            ip_version,
        }
    }
}

fn split_hook(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
