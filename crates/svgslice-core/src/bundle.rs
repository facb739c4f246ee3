// File: crates/svgslice-core/src/bundle.rs
// Summary: Named resource containers that graphics are loaded from.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// A named container of resources addressed by path.
pub trait ResourceBundle {
    fn name(&self) -> &str;

    /// Bytes of the resource at `path`, or `None` when it does not exist.
    fn open(&self, path: &str) -> Option<Cow<'_, [u8]>>;
}

/// Resources compiled into the binary, e.g. via `include_bytes!`.
#[derive(Clone, Debug)]
pub struct StaticBundle {
    name: String,
    entries: Vec<(&'static str, &'static [u8])>,
}

impl StaticBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: Vec::new() }
    }

    pub fn with(mut self, path: &'static str, bytes: &'static [u8]) -> Self {
        self.entries.push((path, bytes));
        self
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }
}

impl ResourceBundle for StaticBundle {
    fn name(&self) -> &str { &self.name }

    fn open(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        self.entries
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
    }
}

/// Resources read from files under a root directory. Paths may not escape the root.
#[derive(Clone, Debug)]
pub struct DirBundle {
    name: String,
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self { name: root.display().to_string(), root }
    }

    pub fn root(&self) -> &Path { &self.root }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let rel = Path::new(path);
        if rel.components().any(|c| !matches!(c, Component::Normal(_) | Component::CurDir)) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

impl ResourceBundle for DirBundle {
    fn name(&self) -> &str { &self.name }

    fn open(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        let full = self.resolve(path)?;
        match std::fs::read(&full) {
            Ok(bytes) => Some(Cow::Owned(bytes)),
            Err(err) => {
                tracing::debug!(path = %full.display(), %err, "resource read failed");
                None
            }
        }
    }
}
