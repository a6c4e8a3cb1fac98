//! mousecap - report whether this terminal should get mouse reporting
//!
//! Runs the same detection a terminal UI would, against the live process
//! environment, and prints the result.
//!
//! # Quick Start
//!
//! ```text
//! mousecap              # mouse: yes (xterm)
//! mousecap -e           # ...plus the rule that decided
//! mousecap -t           # TOML output
//! mousecap -q && echo y # exit status only
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mousecap::{Config, Detection, EnvironmentSignals, MouseProtocol};

/// Environment variable holding the log filter
const LOG_ENV: &str = "MOUSECAP_LOG";

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// Explicit config file
    config_path: Option<PathBuf>,
    /// Skip config files entirely
    no_config: bool,
    /// Print the deciding rule
    explain: bool,
    /// Print TOML instead of text
    toml: bool,
    /// Exit status only
    quiet: bool,
    help: bool,
    version: bool,
}

/// TOML output
#[derive(Debug, Serialize)]
struct Report {
    mouse: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mouse_protocol: Option<MouseProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
}

fn print_version() {
    eprintln!("mousecap {}", VERSION);
}

fn print_help() {
    eprintln!("mousecap {} - Terminal mouse support detection", VERSION);
    eprintln!();
    eprintln!("Usage: mousecap [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <PATH>   Read configuration from PATH");
    eprintln!("      --no-config       Ignore configuration files");
    eprintln!("  -e, --explain         Show which rule decided");
    eprintln!("  -t, --toml            Print the result as TOML");
    eprintln!("  -q, --quiet           No output; exit 0 if supported, 1 if not");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Signals: TERM, TERM_PROGRAM, WT_SESSION, ConEmuPID, stdout TTY status");
    eprintln!();
    eprintln!("Configuration: ~/.mousecap/config.toml");
    eprintln!("Logging: {}=debug", LOG_ENV);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--version" => options.version = true,
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config path".to_string());
                }
                options.config_path = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => options.no_config = true,
            "-e" | "--explain" => options.explain = true,
            "-t" | "--toml" => options.toml = true,
            "-q" | "--quiet" => options.quiet = true,
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    if options.no_config && options.config_path.is_some() {
        return Err("--config and --no-config cannot be combined".to_string());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_config(options: &Options) -> anyhow::Result<Config> {
    if options.no_config {
        return Ok(Config::default());
    }
    match &options.config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Could not load config from {}", path.display())),
        None => Ok(Config::load()),
    }
}

fn render(detection: &Detection, options: &Options) -> anyhow::Result<String> {
    let support = detection.support;
    if options.toml {
        let report = Report {
            mouse: support.mouse(),
            mouse_protocol: support.mouse_protocol(),
            rule: options.explain.then(|| detection.rule.as_str()),
        };
        return toml::to_string(&report).context("Failed to serialize report");
    }

    let mut out = format!("mouse: {}\n", support);
    if options.explain {
        out.push_str(&format!(
            "rule: {} ({})\n",
            detection.rule,
            detection.rule.description()
        ));
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(2);
        }
    };

    if options.help {
        print_help();
        return Ok(());
    }
    if options.version {
        print_version();
        return Ok(());
    }

    init_logging();
    info!("mousecap {} starting", VERSION);

    let config = load_config(&options)?;
    debug!(?config, "effective config");

    let signals = EnvironmentSignals::from_process();
    let detection = config.resolve(&signals);
    info!(rule = %detection.rule, "Mouse support: {}", detection.support);

    if !options.quiet {
        print!("{}", render(&detection, &options)?);
    }

    if options.quiet && !detection.support.mouse() {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mousecap::{DetectionPolicy, Platform};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn xterm_detection() -> Detection {
        let signals = EnvironmentSignals::new(Platform::Linux)
            .with_tty(true)
            .with_var("TERM", "xterm-256color");
        mousecap::classify(&signals, &DetectionPolicy::default())
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(&[]), Ok(Options::default()));
    }

    #[test]
    fn test_parse_args_flags() {
        let options = parse_args(&args(&["-e", "--toml", "-q", "--config", "my.toml"])).unwrap();
        assert!(options.explain);
        assert!(options.toml);
        assert!(options.quiet);
        assert_eq!(options.config_path, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--no-config", "-c", "x.toml"])).is_err());
    }

    #[test]
    fn test_render_text() {
        let detection = xterm_detection();
        let plain = render(&detection, &Options::default()).unwrap();
        assert_eq!(plain, "mouse: yes (xterm)\n");

        let explained = render(
            &detection,
            &Options {
                explain: true,
                ..Options::default()
            },
        )
        .unwrap();
        assert!(explained.contains("rule: term-whitelisted"));
    }

    #[test]
    fn test_render_toml() {
        let options = Options {
            toml: true,
            explain: true,
            ..Options::default()
        };
        let out = render(&xterm_detection(), &options).unwrap();
        assert!(out.contains("mouse = true"));
        assert!(out.contains("mouse_protocol = \"xterm\""));
        assert!(out.contains("rule = \"term-whitelisted\""));

        let signals = EnvironmentSignals::new(Platform::Linux);
        let detection = mousecap::classify(&signals, &DetectionPolicy::default());
        let out = render(
            &detection,
            &Options {
                toml: true,
                ..Options::default()
            },
        )
        .unwrap();
        assert_eq!(out.trim(), "mouse = false");
    }
}
