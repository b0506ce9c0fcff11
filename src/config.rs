//! Command-line configuration

use crate::error::ConfigError;
use crate::report::DEFAULT_OUTPUT;
use crate::scan::DEFAULT_EXTENSIONS;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Compute per-channel color statistics for a folder of block textures.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the images
    #[arg(default_value = "public/block")]
    pub input_dir: PathBuf,

    /// Where to write the JSON results
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// File extension to include (repeatable)
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Also scan subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Number of worker threads (defaults to one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub jobs: Option<usize>,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.jobs == Some(0) {
            return Err(ConfigError::ZeroJobs);
        }

        let extensions = if args.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
        } else {
            args.extensions
        };
        if extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::EmptyExtension);
        }

        let log_level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::Warn,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        };

        Ok(Config {
            input_dir: args.input_dir,
            output: args.output,
            extensions,
            recursive: args.recursive,
            jobs: args.jobs,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("texture-stats").chain(argv.iter().copied()))
            .unwrap();
        Config::try_from(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("public/block"));
        assert_eq!(config.output, PathBuf::from("results.json"));
        assert_eq!(config.extensions, vec!["png".to_string()]);
        assert!(!config.recursive);
        assert_eq!(config.jobs, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "textures", "-o", "out.json", "-e", "png", "-e", "jpg", "-r", "-j", "4", "-vv",
        ])
        .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("textures"));
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.extensions, vec!["png".to_string(), "jpg".to_string()]);
        assert!(config.recursive);
        assert_eq!(config.jobs, Some(4));
        assert_eq!(config.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_quiet() {
        assert_eq!(parse(&["-q"]).unwrap().log_level, LevelFilter::Warn);
        assert_eq!(parse(&["-v"]).unwrap().log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let result = Args::try_parse_from(["texture-stats", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_jobs() {
        assert_eq!(parse(&["-j", "0"]), Err(ConfigError::ZeroJobs));
    }

    #[test]
    fn test_rejects_empty_extension() {
        assert_eq!(parse(&["-e", "."]), Err(ConfigError::EmptyExtension));
    }
}
