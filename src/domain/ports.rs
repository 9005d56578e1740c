use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

/// Read-only access to files. A missing file is reported as
/// `DemoError::MissingResource`.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Explicit fruit list location, if one was configured.
    fn fruit_list_path(&self) -> Option<&str>;
    fn echo_file(&self) -> &str;
}

/// The streams a demo reads from and writes to.
pub struct Console<'a> {
    pub input: &'a mut (dyn AsyncRead + Unpin + Send),
    pub output: &'a mut (dyn AsyncWrite + Unpin + Send),
}

impl<'a> Console<'a> {
    pub fn new(
        input: &'a mut (dyn AsyncRead + Unpin + Send),
        output: &'a mut (dyn AsyncWrite + Unpin + Send),
    ) -> Self {
        Self { input, output }
    }
}

#[async_trait]
pub trait Demo: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, console: &mut Console<'_>) -> Result<()>;
}
