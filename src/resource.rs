//! Resource namespaces that playlists and sound files resolve against.
//!
//! Paths are always relative, `/`-separated names such as
//! `sounds/config/babysmash.sounds`. A leading `/` is ignored.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, Cursor, Read},
    path::{Component, Path, PathBuf},
    sync::Arc,
};

/// A namespace of named, readable resources.
pub trait ResourceSource: Send + Sync {
    /// Open a resource by name.
    ///
    /// `Ok(None)` means the resource does not exist. `Err` means it exists
    /// but could not be opened.
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send>>>;
}

/// Resources stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a resource name onto a file below the root.
    ///
    /// Returns `None` for names that would escape the root.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        let mut depth = 0usize;

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if depth == 0 {
                        return None;
                    }
                    resolved.pop();
                    depth -= 1;
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        (depth > 0).then_some(resolved)
    }
}

impl ResourceSource for DirResources {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send>>> {
        let Some(file_path) = self.resolve(path) else {
            return Ok(None);
        };
        if !file_path.is_file() {
            return Ok(None);
        }
        match File::open(&file_path) {
            Ok(file) => Ok(Some(Box::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// An in-memory resource bundle.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a resource, builder style.
    pub fn with(mut self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn insert(&mut self, path: &str, data: impl Into<Vec<u8>>) {
        let key = path.trim_start_matches('/').to_string();
        self.files.insert(key, Arc::from(data.into()));
    }
}

/// Shared byte buffer readable through `Cursor`.
struct SharedBytes(Arc<[u8]>);

impl AsRef<[u8]> for SharedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ResourceSource for MemoryResources {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send>>> {
        let open = |data: &Arc<[u8]>| -> Box<dyn Read + Send> {
            Box::new(Cursor::new(SharedBytes(Arc::clone(data))))
        };
        Ok(self.files.get(path.trim_start_matches('/')).map(open))
    }
}
