use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod app;
mod batch;
mod cli;
mod config;
mod errors;
mod metadata;
mod report;
mod scrape;
#[cfg(test)]
mod tests;
mod thumbnail;
mod video_id;

use config::Config;
use errors::ThumbError;
use scrape::ReqwestTransport;

type LogSubscriber<W> = fmt::Subscriber<DefaultFields, Format<Full, ()>, EnvFilter, W>;

fn log_subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> LogSubscriber<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .finish()
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // colour only when a person is reading stderr
    log_subscriber(filter, std::io::stderr, std::io::stderr().is_terminal()).init();
}

fn report_error(err: &ThumbError) -> ExitCode {
    eprintln!("Error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!("{hint}");
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_logging(args.log_filter());

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => return report_error(&err),
    };

    let transport = match ReqwestTransport::new(&config) {
        Ok(transport) => transport,
        Err(err) => {
            eprintln!("Error: could not build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(args.mode(), &config, &transport) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}
