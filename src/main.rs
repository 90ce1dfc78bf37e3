//! Entry point: parse CLI, open the store and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use student_records::{
    cli::Records,
    commands::{common::open_store, run},
    logging::init_cli_logger,
};
use tracing::warn;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Records::parse();
    init_cli_logger(app.verbose);

    let mut store = open_store(app.backend, app.db.as_deref())
        .with_context(|| format!("failed to open {} store", app.backend))?;

    match run(&app, store.as_mut()) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) if e.is_validation() => {
            warn!(error = %e, "rejected input");
            eprintln!("ERROR: {}", e);
            std::process::exit(2);
        }
        Err(e) => Err(e).context("command failed"),
    }
}
