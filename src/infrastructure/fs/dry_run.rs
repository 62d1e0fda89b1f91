//! Dry-run File System
//!
//! Reads fall through to the wrapped file system; writes, copies and new
//! directories are only recorded, so a run can be previewed.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsResult};

#[derive(Debug, Default)]
pub struct DryRunFs<F: FileSystem> {
    inner: F,
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl<F: FileSystem> DryRunFs<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            files: RefCell::new(BTreeMap::new()),
            dirs: RefCell::new(BTreeSet::new()),
        }
    }

    /// Files a real run would write, with their content
    pub fn pending_files(&self) -> BTreeMap<PathBuf, String> {
        self.files.borrow().clone()
    }

    /// Directories a real run would create
    pub fn pending_dirs(&self) -> Vec<PathBuf> {
        self.dirs.borrow().iter().cloned().collect()
    }
}

impl<F: FileSystem> FileSystem for DryRunFs<F> {
    fn read(&self, path: &Path) -> FsResult<String> {
        match self.files.borrow().get(path) {
            Some(content) => Ok(content.clone()),
            None => self.inner.read(path),
        }
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
            || self.dirs.borrow().contains(path)
            || self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        if !self.inner.exists(path) {
            self.dirs.borrow_mut().insert(path.to_path_buf());
        }
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read(from)?;
        self.write(to, &content)
    }
}
