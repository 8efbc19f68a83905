//! Command line pieces shared by the sprig binaries

use clap::{value_parser, ArgAction, Args};

/// Common way to set logging levels
#[derive(Debug, Default, Clone, Copy, Args)]
pub struct LoggingArgs {
    /// Log more, up to twice
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, up to twice
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// How far from the default level `-v[v]` or `-q[q]` moved logging. Positive is more verbose.
    pub fn verbosity(&self) -> i8 {
        self.verbose as i8 - self.quiet as i8
    }

    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.verbosity() {
            ..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            2.. => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn verbosity(args: &str) -> i8 {
        TestArgs::try_parse_from(args.split_whitespace())
            .expect("could not parse test string")
            .logging
            .verbosity()
    }

    #[test]
    fn test_counts() {
        assert_eq!(verbosity("test"), 0);
        assert_eq!(verbosity("test -v"), 1);
        assert_eq!(verbosity("test -vv"), 2);
        assert_eq!(verbosity("test -q"), -1);
        assert_eq!(verbosity("test -q -q"), -2);
    }

    #[test]
    fn test_rejects_mixed() {
        assert!(TestArgs::try_parse_from(["test", "-v", "-q"]).is_err());
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_level_filter() {
        use tracing::level_filters::LevelFilter;
        let parse = |args: &[&str]| {
            TestArgs::try_parse_from(args.iter().copied())
                .expect("could not parse test string")
                .logging
                .log_level_filter()
        };
        assert_eq!(parse(&["test"]), LevelFilter::WARN);
        assert_eq!(parse(&["test", "-vv"]), LevelFilter::TRACE);
        assert_eq!(parse(&["test", "-qq"]), LevelFilter::OFF);
    }
}
