pub mod echo;
pub mod fruits;
pub mod gcd;
pub mod runner;

pub use crate::domain::model::{DemoPath, Operands, StepKind};
pub use crate::domain::ports::{ConfigProvider, Console, Demo, Storage};
pub use crate::utils::error::Result;
