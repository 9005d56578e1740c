pub mod cli;
pub mod toml_config;

use crate::core::fruits::FRUIT_LIST_FILE;
use crate::core::ConfigProvider;
use std::path::{Path, PathBuf};

pub const RESOURCE_DIR: &str = "resources";

#[cfg(feature = "cli")]
pub use self::args::{CliConfig, DemoCommand};

/// Where to look for the fruit list, in order: the configured path, next to the
/// executable, the current directory, then `resources/` under it.
pub fn fruit_list_candidates<C: ConfigProvider>(config: &C) -> Vec<PathBuf> {
    if let Some(path) = config.fruit_list_path() {
        return vec![PathBuf::from(path)];
    }

    let mut candidates = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(FRUIT_LIST_FILE));
    }
    candidates.push(PathBuf::from(FRUIT_LIST_FILE));
    candidates.push(Path::new(RESOURCE_DIR).join(FRUIT_LIST_FILE));
    candidates
}

/// First candidate that exists. When none does, the first candidate is
/// returned so the load reports it as missing.
pub fn resolve_fruit_list<C: ConfigProvider>(config: &C) -> String {
    let candidates = fruit_list_candidates(config);
    let chosen = candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| FRUIT_LIST_FILE.to_string());

    tracing::debug!("Fruit list resolved to {} (candidates: {:?})", chosen, candidates);
    chosen
}

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::DemoConfig;
    use crate::core::DemoPath;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "gcd-fruits")]
    #[command(about = "Greatest common divisor, fruit list and file echo demos")]
    pub struct CliConfig {
        /// Path to an optional TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        /// Location of the bundled fruit list
        #[arg(long, global = true)]
        pub resource: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Option<DemoCommand>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum DemoCommand {
        /// Read two integers from stdin, print their GCD, then the fruit list (default)
        GcdFruits,
        /// Read two integers from stdin, print their GCD, then echo a file
        GcdEcho {
            /// File to echo [default: copyme.txt]
            file: Option<String>,
        },
        /// Read two integers from stdin and print their GCD
        Gcd,
        /// Print the bundled fruit list
        Fruits,
        /// Echo a file to stdout
        Echo {
            /// File to echo [default: copyme.txt]
            file: Option<String>,
        },
    }

    impl CliConfig {
        pub fn demo_path(&self) -> DemoPath {
            match self.command {
                None | Some(DemoCommand::GcdFruits) => DemoPath::GcdThenFruits,
                Some(DemoCommand::GcdEcho { .. }) => DemoPath::GcdThenEcho,
                Some(DemoCommand::Gcd) => DemoPath::Gcd,
                Some(DemoCommand::Fruits) => DemoPath::Fruits,
                Some(DemoCommand::Echo { .. }) => DemoPath::Echo,
            }
        }

        /// Command-line values win over the config file.
        pub fn apply_overrides(&self, config: &mut DemoConfig) {
            if let Some(resource) = &self.resource {
                config.resources.fruit_list = Some(resource.clone());
                tracing::debug!("Fruit list overridden to: {}", resource);
            }

            if let Some(DemoCommand::Echo { file: Some(file) })
            | Some(DemoCommand::GcdEcho { file: Some(file) }) = &self.command
            {
                config.echo.file = file.clone();
                tracing::debug!("Echo file overridden to: {}", file);
            }

            if self.verbose {
                config.logging.verbose = true;
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::toml_config::DemoConfig;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_configured_path_is_only_candidate() {
        let mut config = DemoConfig::default();
        config.resources.fruit_list = Some("/data/fruits.txt".to_string());
        assert_eq!(
            fruit_list_candidates(&config),
            vec![PathBuf::from("/data/fruits.txt")]
        );
        assert_eq!(resolve_fruit_list(&config), "/data/fruits.txt");
    }

    #[test]
    fn test_default_candidates_end_in_resource_dir() {
        let config = DemoConfig::default();
        let candidates = fruit_list_candidates(&config);
        assert_eq!(
            candidates.last(),
            Some(&Path::new(RESOURCE_DIR).join(FRUIT_LIST_FILE))
        );
        assert!(candidates.contains(&PathBuf::from(FRUIT_LIST_FILE)));
        assert!(candidates
            .iter()
            .all(|path| path.file_name().and_then(|n| n.to_str()) == Some(FRUIT_LIST_FILE)));
    }

    #[test]
    fn test_existing_configured_file_resolves() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("fruits.txt");
        std::fs::write(&file, "Apple\n").unwrap();

        let mut config = DemoConfig::default();
        config.resources.fruit_list = Some(file.to_str().unwrap().to_string());
        assert_eq!(resolve_fruit_list(&config), file.display().to_string());
    }
}
