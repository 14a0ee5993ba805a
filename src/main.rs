//! safeview CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use safeview::cli::{Cli, Command, ViewCommand};
use safeview::config::Settings;
use safeview::report::ReportFormat;
use safeview::ui::{create_ui, is_interactive_session, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so logs stay out of the report
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("safeview=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("safeview=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("safeview starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let settings = Settings::from_cli(&cli);

    // JSON owns stdout; only errors are printed around it.
    let output_mode = match settings.format {
        ReportFormat::Text => OutputMode::Normal,
        ReportFormat::Json => OutputMode::Silent,
    };

    let mut ui = create_ui(is_interactive_session(), output_mode);
    let command = ViewCommand::new(settings);

    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
