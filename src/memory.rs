use crate::manager::{FileManager, MutableFile};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap as Map, BTreeSet as Set};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// [`FileManager`] that keeps files in memory and counts physical writes.
///
/// Useful for dry runs and for observing what a writer would do. Faults can be
/// injected to exercise error paths.
#[derive(Default, Debug)]
pub struct MemoryFileManager {
    files: RefCell<Map<PathBuf, String>>,
    unreadable: RefCell<Set<PathBuf>>,
    writes: Cell<usize>,
    commit_attempts: Cell<usize>,
    refuse_create: Cell<bool>,
    fail_writes: Cell<bool>,
    fail_commits: Cell<bool>,
}

impl MemoryFileManager {
    pub fn new() -> Self {
        MemoryFileManager::default()
    }

    /// Places a file without counting it as a write.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of handles committed so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Number of times a handle tried to commit, successful or not.
    pub fn commit_attempts(&self) -> usize {
        self.commit_attempts.get()
    }

    /// Makes reads of `path` fail while it still exists.
    pub fn mark_unreadable(&self, path: impl Into<PathBuf>) {
        self.unreadable.borrow_mut().insert(path.into());
    }

    /// Makes `create_file` return no handle.
    pub fn refuse_create(&self, refuse: bool) {
        self.refuse_create.set(refuse);
    }

    /// Makes every write to a handle fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Makes every commit fail after the bytes were accepted by the handle.
    pub fn fail_commits(&self, fail: bool) {
        self.fail_commits.set(fail);
    }

    fn handle(&self, path: &Path) -> MemoryFile<'_> {
        MemoryFile {
            manager: self,
            path: path.to_owned(),
            buffer: Vec::new(),
            dirty: true,
        }
    }
}

impl FileManager for MemoryFileManager {
    type File<'a> = MemoryFile<'a>;

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn create_file(&self, path: &Path) -> Option<MemoryFile<'_>> {
        if self.refuse_create.get() {
            return None;
        }
        Some(self.handle(path))
    }

    fn update_file(&self, path: &Path) -> MemoryFile<'_> {
        self.handle(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "file marked unreadable",
            ));
        }
        self.contents(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Handle returned by [`MemoryFileManager`].
#[derive(Debug)]
pub struct MemoryFile<'a> {
    manager: &'a MemoryFileManager,
    path: PathBuf,
    buffer: Vec<u8>,
    dirty: bool,
}

impl MemoryFile<'_> {
    fn commit(&mut self) -> io::Result<()> {
        self.dirty = false;
        let manager = self.manager;
        manager.commit_attempts.set(manager.commit_attempts.get() + 1);
        if manager.fail_commits.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "commit failed"));
        }

        let contents = String::from_utf8(self.buffer.clone())
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        self.manager
            .files
            .borrow_mut()
            .insert(self.path.clone(), contents);
        self.manager.writes.set(self.manager.writes.get() + 1);
        Ok(())
    }
}

impl MutableFile for MemoryFile<'_> {
    fn canonical_path(&self) -> &Path {
        &self.path
    }
}

impl Write for MemoryFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.manager.fail_writes.get() {
            // Nothing reaches the manager from a failed handle.
            self.dirty = false;
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.dirty = true;
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.dirty {
            self.commit()?;
        }
        Ok(())
    }
}

impl Drop for MemoryFile<'_> {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(error) = self.commit() {
                tracing::error!(path = %self.path.display(), %error, "failed to write file");
            }
        }
    }
}
