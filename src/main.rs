use clap::Parser;
use trendy_cucumber::cli::commands::cmd_report;
use trendy_cucumber::cli::config::{Cli, USAGE_HINT, build_run_options, load_config};
use trendy_cucumber::error::ReportError;
use trendy_cucumber::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    let Some(options) = build_run_options(&cli, &config) else {
        eprintln!("{}\n", USAGE_HINT);
        std::process::exit(ReportError::MissingInput.exit_code());
    };

    // Export failures are already logged and do not change the status.
    if let Err(e) = cmd_report(&options) {
        tracing::error!(error = %e, "report failed");
        std::process::exit(e.exit_code());
    }
}
