use crate::core::Storage;
use crate::utils::error::{LrError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }

    fn temp_path_for(full_path: &Path) -> PathBuf {
        let mut name = full_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        full_path.with_file_name(name)
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path);
        fs::read_to_string(&full_path).map_err(|source| LrError::MissingInput {
            path: full_path.display().to_string(),
            source,
        })
    }

    /// 先寫入暫存檔再 rename, 失敗時不留下不完整的輸出
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_failure = |source: std::io::Error| LrError::WriteFailure {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_failure)?;
            }
        }

        let temp_path = Self::temp_path_for(&full_path);
        let result = fs::write(&temp_path, data).and_then(|_| fs::rename(&temp_path, &full_path));

        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(write_failure(source));
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }

    fn display_path(&self, path: &str) -> String {
        let full_path = self.resolve(path);
        fs::canonicalize(&full_path)
            .unwrap_or(full_path)
            .display()
            .to_string()
    }
}
