use crate::core::Storage;
use crate::utils::error::{DemoError, Result};
use std::path::Path;

/// Reads files relative to `base_path`; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    /// Storage rooted at the current working directory.
    pub fn current_dir() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);

        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DemoError::MissingResource {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(DemoError::FileRead {
                path: full_path.display().to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_relative_and_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("FruitList.txt");
        std::fs::write(&file, "Apple\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        assert_eq!(storage.read_file("FruitList.txt").await.unwrap(), b"Apple\n");

        let elsewhere = LocalStorage::current_dir();
        assert_eq!(
            elsewhere.read_file(file.to_str().unwrap()).await.unwrap(),
            b"Apple\n"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_missing_resource() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("nope.txt").await.unwrap_err();
        match err {
            DemoError::MissingResource { path } => assert!(path.ends_with("nope.txt")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
