//! Input file loading.
//!
//! Commands that accept `--input-file` deserialize a JSON document into their
//! request type through [`InputFileLoader`].

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{InputError, Result};

/// Read access to files.
///
/// Abstracts the file system so the loader can be exercised without disk.
pub trait FileSource {
    /// Whether `path` names an existing regular file.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// The local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileSource for LocalFiles {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Resolves and deserializes input files.
pub struct InputFileLoader {
    root: PathBuf,
    source: Box<dyn FileSource>,
}

impl std::fmt::Debug for InputFileLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputFileLoader")
            .field("root", &self.root)
            .finish()
    }
}

impl InputFileLoader {
    /// Loader resolving relative paths against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_source(std::env::current_dir()?, LocalFiles))
    }

    /// Loader with an explicit root directory and file source.
    pub fn with_source(root: impl Into<PathBuf>, source: impl FileSource + 'static) -> Self {
        Self {
            root: root.into(),
            source: Box::new(source),
        }
    }

    /// Resolve `path` against the loader's root. Absolute paths are kept.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Load a JSON document into `T`.
    ///
    /// An empty `path` returns `T::default()` without touching the file
    /// system; callers use it when the value came inline instead.
    ///
    /// # Errors
    ///
    /// - `InputError::FileNotFound` if the resolved path does not exist
    /// - `InputError::Read` if the file cannot be read
    /// - `InputError::Deserialize` carrying the parser's error unchanged
    pub fn load<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T> {
        if path.is_empty() {
            return Ok(T::default());
        }

        let resolved = self.resolve(path);
        debug!(path = %resolved.display(), "loading input file");

        if !self.source.exists(&resolved) {
            return Err(InputError::FileNotFound(resolved).into());
        }

        let contents = self
            .source
            .read_to_string(&resolved)
            .map_err(|source| InputError::Read {
                path: resolved.clone(),
                source,
            })?;

        match serde_json::from_str(&contents) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                debug!(
                    path = %resolved.display(),
                    line = e.line(),
                    column = e.column(),
                    "deserializing the input file failed"
                );
                Err(InputError::Deserialize(e).into())
            }
        }
    }
}
