use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rlp_canon_host::{app_args::App, error::HostResult, run};
use tracing::debug;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::FmtSubscriber;

fn main() -> HostResult<()> {
    dotenv::dotenv().ok();
    let app = parse_app()?;

    let _guard = subscribe_log(
        &app.global_opts.log_path,
        &app.global_opts.log_level(),
        app.global_opts.max_log(),
    )?;
    debug!("Args:\n{:#?}", app);

    let output = run(&app)?;
    println!("{output}");
    Ok(())
}

fn parse_app() -> HostResult<App> {
    // Read the command line arguments;
    let mut app = App::parse();
    // Read the config file.
    app.global_opts.merge_from_file()?;

    Ok(app)
}

fn subscribe_log(
    log_path: &Option<PathBuf>,
    log_level: &str,
    max_log: usize,
) -> HostResult<Option<WorkerGuard>> {
    let subscriber_builder = FmtSubscriber::builder().with_env_filter(log_level);
    match log_path {
        Some(ref log_path) => {
            let file_appender = Builder::new()
                .rotation(Rotation::DAILY)
                .filename_prefix("rlp-canon.log")
                .max_log_files(max_log)
                .build(log_path)
                .context("initializing rolling file appender failed")?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let subscriber = subscriber_builder.json().with_writer(non_blocking).finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("setting the global subscriber failed")?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = subscriber_builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("setting the global subscriber failed")?;
            Ok(None)
        }
    }
}
