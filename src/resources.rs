//! Bundled resource resolution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves a resource stem and extension to a bundled file.
pub trait ResourceResolver {
    /// Path of `stem.extension`, or `None` if the bundle has no such file.
    fn resource_path(&self, stem: &str, extension: &str) -> Option<PathBuf>;
}

/// Resources shipped in a directory next to the application.
#[derive(Debug, Clone)]
pub struct BundledResources {
    root: PathBuf,
}

impl BundledResources {
    /// Resolve resources under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The resource directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceResolver for BundledResources {
    fn resource_path(&self, stem: &str, extension: &str) -> Option<PathBuf> {
        let path = self.root.join(format!("{stem}.{extension}"));
        if path.is_file() {
            Some(path)
        } else {
            tracing::warn!(path = %path.display(), "bundled resource not found");
            None
        }
    }
}

/// Fixed stem-to-path table, for tests and for running without a bundle.
#[derive(Debug, Clone, Default)]
pub struct StaticResources {
    paths: HashMap<(String, String), PathBuf>,
}

impl StaticResources {
    /// An empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource.
    pub fn with(
        mut self,
        stem: impl Into<String>,
        extension: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.paths
            .insert((stem.into(), extension.into()), path.into());
        self
    }
}

impl ResourceResolver for StaticResources {
    fn resource_path(&self, stem: &str, extension: &str) -> Option<PathBuf> {
        self.paths
            .get(&(stem.to_string(), extension.to_string()))
            .cloned()
    }
}
