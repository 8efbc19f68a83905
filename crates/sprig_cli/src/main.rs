use crate::args::Args;
use crate::emit::emit;
use clap::Parser;
use eyre::WrapErr;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use std::io::Read;
use std::path::Path;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;
mod emit;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_level_filter())?;
    trace!("starting sprig with args: {args:?}");
    debug!("sprig version: {}", env!("CARGO_PKG_VERSION"));

    let (name, src) = read_source(args.source_file())?;
    match emit(&src, args.emit) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(error) => {
            eprintln!(
                "{}: {name}",
                "error".if_supports_color(Stderr, |text| text.red())
            );
            eprint!("{}", error.render(&src));
            Err(error).wrap_err_with(|| format!("could not parse {name}"))
        }
    }
}

/// Reads the whole source, from stdin if there's no file. Returns the name to report it by too.
fn read_source(file: Option<&Path>) -> eyre::Result<(String, String)> {
    let (name, src) = match file {
        Some(path) => {
            let src = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("could not read {path:?}"))?;
            (path.display().to_string(), src)
        }
        None => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .wrap_err("could not read stdin")?;
            ("<stdin>".to_string(), src)
        }
    };
    debug!("read {} bytes from {name}", src.len());
    Ok((name, src))
}

/// Logs go to stderr so stdout only carries the emitted output
fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
