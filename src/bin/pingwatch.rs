use clap::Parser;
use console::{Term, set_colors_enabled, style};
use std::io::{self, IsTerminal};
use std::process;

use pingwatch::cli::Args;
use pingwatch::fmt::{self, OutputFormat};
use pingwatch::services::monitor;

#[tokio::main]
async fn main() {
    let mut args = Args::parse();

    // alias --json
    if args.json {
        args.format = OutputFormat::Json;
    }

    // colors
    let want_color = matches!(args.format, OutputFormat::Text)
        && io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && !args.no_color;
    set_colors_enabled(want_color);

    let term = Term::stdout();
    let config = args.to_config();

    if config.target.trim().is_empty() {
        term.write_line(
            &style("Error: target must not be empty")
                .red()
                .bold()
                .to_string(),
        )
        .ok();
        process::exit(2);
    }

    if matches!(args.format, OutputFormat::Text) {
        term.write_line(&fmt::text::render_banner(&config.target)).ok();
    }

    let stats = monitor::run(&config, args.format, &term).await;

    match args.format {
        OutputFormat::Json => match fmt::json::stats_to_json(&config.target, &stats) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serializing: {}", e),
        },
        OutputFormat::Text => {
            term.write_line(&fmt::text::render_stats(&config.target, &stats))
                .ok();
        }
    }
}
