use batchname::cli::{BatchArgs, Cli, Command};
use batchname::error::{Error, ErrorKind, Result};
use batchname::session::Session;
use batchname_config::AppConfig;
use batchname_naming::NamingSpec;
use clap::Parser;
use exn::ResultExt;
use std::fs;
use std::ops::Deref;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        // An empty batch is a notice, not a failure: the action is simply
        // unavailable, same as the original tool's disabled download button.
        Err(error) if matches!(error.deref(), ErrorKind::EmptyBatch) => {
            tracing::warn!("{error}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .or_raise(|| ErrorKind::Config)?;
    let mut session = Session::new(config);

    match cli.command {
        Command::Preview(batch) => {
            let spec = prepare(&mut session, &batch)?;
            print_preview(&session, &spec);
        },
        Command::Pack { batch, output } => {
            let spec = prepare(&mut session, &batch)?;
            let artifact = session.package(&spec)?;
            let path = output.unwrap_or_else(|| PathBuf::from(&artifact.filename));
            fs::write(&path, &artifact.bytes).or_raise(|| ErrorKind::Output(path.clone()))?;
            println!("{}", path.display());
        },
    }
    Ok(())
}

/// Ingests the batch, applies any one-shot reorder, and builds the spec.
fn prepare(session: &mut Session, batch: &BatchArgs) -> Result<NamingSpec> {
    session.ingest_paths(&batch.files)?;
    if let Some(order) = &batch.order {
        session.order_by_positions(order)?;
    }
    let sanitize = batch.slug.then_some(true);
    session.parse_spec(&batch.spec, batch.start_number, batch.pad_width, sanitize)
}

fn print_preview(session: &Session, spec: &NamingSpec) {
    for row in session.preview(spec) {
        let marker = if row.is_image { "img" } else { "   " };
        println!("{:>3}  {marker}  {}  (from {})", row.position, row.rendered_name, row.original_name);
    }
}

fn report(error: &Error) {
    eprintln!("batchname: {error}");
    // The full error tree (locations included) is debug output.
    tracing::debug!(?error, "command failed");
}
