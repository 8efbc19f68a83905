//! the args for running sprig

use clap::ValueEnum;
use sprig_cli_common::LoggingArgs;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Lexes and parses sprig source code")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// What to print once the source is read
    #[clap(long, value_enum, default_value_t = Emit::Ast, env = "SPRIG_EMIT")]
    pub emit: Emit,

    /// The source file to read. Reads stdin when omitted or `-`
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,
}

/// The stage of the pipeline to print
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// One token per line
    Tokens,
    /// Each top level statement on its own line
    Ast,
    /// The whole program as an indented tree
    Tree,
}

impl Args {
    /// The source file to read, `None` for stdin
    pub fn source_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.logging.log_level_filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(test: &str) -> Args {
        Args::try_parse_from(test.split(' ')).expect("could not parse test string")
    }

    #[test]
    fn test_args_parsing() {
        let args = parse("sprig file.sprig");
        assert_eq!(args.source_file(), Some(Path::new("file.sprig")));
        assert_eq!(args.log_level_filter(), LevelFilter::WARN);
    }

    #[test]
    fn test_stdin() {
        assert_eq!(parse("sprig").source_file(), None);
        assert_eq!(parse("sprig -").source_file(), None);
    }

    #[test]
    fn test_emit() {
        assert_eq!(parse("sprig --emit tokens").emit, Emit::Tokens);
        assert_eq!(parse("sprig -v --emit tree file.sprig").emit, Emit::Tree);
        assert!(Args::try_parse_from(["sprig", "--emit", "bytecode"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse("sprig -vv").log_level_filter(), LevelFilter::TRACE);
        assert_eq!(parse("sprig -q").log_level_filter(), LevelFilter::ERROR);
    }
}
