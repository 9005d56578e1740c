use crate::domain::ports::{Console, Demo, Storage};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::OnceCell;

pub const FRUIT_LIST_FILE: &str = "FruitList.txt";

static FRUIT_LIST: OnceCell<FruitList> = OnceCell::const_new();

/// Ordered, immutable list of fruit names, one per line of the bundled resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FruitList {
    names: Vec<String>,
}

impl FruitList {
    /// Split `text` into lines. Order and duplicates are kept as-is; a trailing
    /// line terminator does not add an empty entry.
    pub fn parse(text: &str) -> Self {
        Self {
            names: text.lines().map(str::to_owned).collect(),
        }
    }

    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage.read_file(path).await?;
        let text = String::from_utf8(bytes).map_err(|e| DemoError::InvalidResource {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let list = Self::parse(&text);
        tracing::debug!("Loaded {} fruit(s) from {}", list.len(), path);
        Ok(list)
    }

    /// Process-wide list, loaded on the first call. Later calls return the same
    /// list and ignore their arguments.
    pub async fn global<S: Storage>(storage: &S, path: &str) -> Result<&'static FruitList> {
        FRUIT_LIST
            .get_or_try_init(|| Self::load(storage, path))
            .await
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub async fn print<W>(&self, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        for name in &self.names {
            output.write_all(name.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }
        Ok(())
    }
}

pub struct FruitsDemo<'a> {
    list: &'a FruitList,
}

impl<'a> FruitsDemo<'a> {
    pub fn new(list: &'a FruitList) -> Self {
        Self { list }
    }
}

#[async_trait]
impl<'a> Demo for FruitsDemo<'a> {
    fn name(&self) -> &'static str {
        "fruits"
    }

    async fn run(&self, console: &mut Console<'_>) -> Result<()> {
        self.list.print(&mut *console.output).await
    }
}
