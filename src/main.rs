use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use size_limit::cmd;
use size_limit::error::{ErrorFormatter, EXIT_ERROR};
use size_limit::measure::{AnalyzerMode, FsMeasurer};
use size_limit::options::RunOptions;
use std::path::PathBuf;
use std::{env, process};

/// Check that your JS files stay within their size budget
///
/// Without arguments, size checks are read from the `size-limit` key of
/// package.json or from a `.size-limit` / `.size-limit.json` file.
#[derive(Parser)]
#[command(name = "size-limit", author, version, about, long_about = None)]
pub struct Cli {
    /// Show package content and why it has this size
    #[arg(short, long)]
    why: bool,

    /// Disable webpack
    #[arg(long = "no-webpack", action = ArgAction::SetFalse)]
    webpack: bool,

    /// Disable gzip
    #[arg(long = "no-gzip", action = ArgAction::SetFalse)]
    gzip: bool,

    /// Custom webpack config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Files to check, optionally preceded by a limit (deprecated)
    #[arg(value_name = "FILES")]
    files: Vec<String>,
}

impl Cli {
    /// Command definition with `-v` as the version flag
    fn command_with_version() -> clap::Command {
        Cli::command().disable_version_flag(true).arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
    }

    fn into_options(self, cwd: PathBuf) -> RunOptions {
        let mut options = RunOptions::new(cwd);
        options.why = self.why;
        options.webpack = self.webpack;
        options.gzip = self.gzip;
        options.json = self.json;
        options.config = self.config;
        options.files = self.files;
        options
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let matches = Cli::command_with_version().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            let error = anyhow::Error::new(e).context("Failed to read the working directory");
            eprintln!("{}", ErrorFormatter::format(&error));
            process::exit(EXIT_ERROR);
        }
    };

    let mut options = cli.into_options(cwd);
    options.invocation = env::args().skip(1).collect();
    options.analyzer = AnalyzerMode::from_node_env(env::var("NODE_ENV").ok().as_deref());

    match cmd::cmd_run(&options, &FsMeasurer::new()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", ErrorFormatter::format(&e));
            process::exit(ErrorFormatter::exit_code(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command_with_version().debug_assert()
    }

    #[test]
    fn test_flags_map_to_options() {
        let matches = Cli::command_with_version()
            .try_get_matches_from(["size-limit", "--no-gzip", "-w", "--config", "w.js"])
            .unwrap();
        let options = Cli::from_arg_matches(&matches)
            .unwrap()
            .into_options(PathBuf::from("/p"));

        assert!(options.why);
        assert!(options.webpack);
        assert!(!options.gzip);
        assert_eq!(options.config, Some(PathBuf::from("w.js")));
        assert!(!options.is_legacy());
    }

    #[test]
    fn test_positional_files_are_collected() {
        let matches = Cli::command_with_version()
            .try_get_matches_from(["size-limit", "--no-webpack", "10", "KB", "index.js"])
            .unwrap();
        let options = Cli::from_arg_matches(&matches)
            .unwrap()
            .into_options(PathBuf::from("/p"));

        assert!(!options.webpack);
        assert_eq!(options.files, vec!["10", "KB", "index.js"]);
    }
}
