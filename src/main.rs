use anyhow::Result;
use clap::Parser;
use dashline::config::AppConfig;
use dashline::{read_payload, ColorMode, SessionIdWidget, Widget, WidgetContext};
use log::{debug, error};
use std::io::{self, Write};
use std::path::PathBuf;

/// dashline - render a status-line widget from the host's JSON payload
#[derive(Parser, Debug, Clone)]
#[command(name = "dashline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Color output: auto, always or never (overrides the config file)
    #[arg(long = "color", value_name = "WHEN", value_parser = parse_color_mode)]
    color: Option<ColorMode>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=warn, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Read the payload from this file instead of stdin
    #[arg(value_name = "INPUT_FILE")]
    input: Option<PathBuf>,
}

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only, so stdout stays a clean status line
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let app_config = AppConfig::load_or_default(cli.config.as_deref());
    let color_mode = app_config.effective_color_mode(cli.color);
    debug!("Color mode: {}", color_mode);

    let stdin = read_payload(cli.input.as_deref())?;
    let ctx = WidgetContext::new(stdin).with_color_mode(color_mode);
    let widget = SessionIdWidget::new();

    if let Some(line) = widget.render_line(&ctx) {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
    }

    Ok(())
}
