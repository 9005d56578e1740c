use crate::domain::ports::{Console, Demo, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

pub const DEFAULT_ECHO_FILE: &str = "copyme.txt";

/// Copies a file to the console output byte for byte.
pub struct EchoDemo<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> EchoDemo<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<S: Storage> Demo for EchoDemo<S> {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let data = self.storage.read_file(&self.path).await?;
        tracing::debug!("Echoing {} byte(s) from {}", data.len(), self.path);
        console.output.write_all(&data).await?;
        Ok(())
    }
}
