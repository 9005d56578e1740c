pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DemoCommand};

pub use app::Session;
pub use config::{cli::LocalStorage, toml_config::DemoConfig};
pub use crate::core::{
    fruits::FruitList,
    gcd::{gcd, read_operands},
    runner::DemoRunner,
    Console, DemoPath,
};
pub use utils::error::{DemoError, Result};
