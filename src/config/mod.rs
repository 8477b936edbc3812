pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command, FontAction, LookupArgs};

#[cfg(feature = "cli")]
mod args {
    use crate::utils::error::{DirectoryError, Result};
    use crate::utils::validation::Validate;
    use clap::{Args, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "venue-access")]
    #[command(about = "Look up businesses and infer their accessibility information")]
    pub struct CliConfig {
        /// Path to a TOML settings file
        #[arg(short, long, global = true, env = "VENUE_ACCESS_CONFIG")]
        pub config: Option<PathBuf>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Add places to a session directory and list the matching venues
        Lookup(LookupArgs),
        /// Show or change the saved font scale
        Font {
            #[command(subcommand)]
            action: FontAction,
        },
    }

    #[derive(Debug, Clone, Args)]
    pub struct LookupArgs {
        /// Google place id to look up (repeatable)
        #[arg(long = "place-id")]
        pub place_ids: Vec<String>,

        /// JSON file holding a place record (repeatable)
        #[arg(long = "place-file")]
        pub place_files: Vec<PathBuf>,

        /// Only list venues whose name contains this text
        #[arg(short, long, default_value = "")]
        pub query: String,

        /// Print venues as JSON instead of cards
        #[arg(long)]
        pub json: bool,

        /// Print the read-aloud text for each venue
        #[arg(long)]
        pub narrate: bool,

        /// Print photo URLs with the Google API key instead of masking it
        #[arg(long)]
        pub reveal_keys: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
    pub enum FontAction {
        Show,
        Increase,
        Reset,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Command::Lookup(args) = &self.command {
                if args.place_ids.is_empty() && args.place_files.is_empty() {
                    return Err(DirectoryError::ConfigError {
                        message: "lookup needs at least one --place-id or --place-file".to_string(),
                    });
                }
                if args.place_ids.iter().any(|id| id.trim().is_empty()) {
                    return Err(DirectoryError::InvalidConfigValueError {
                        field: "place-id".to_string(),
                        value: String::new(),
                        reason: "Place id cannot be empty".to_string(),
                    });
                }
            }
            Ok(())
        }
    }

}
