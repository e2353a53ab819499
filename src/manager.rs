use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Capability set the writer needs from whatever owns the files on disk.
///
/// Methods take `&self`; implementations keep their own bookkeeping behind
/// interior mutability.
pub trait FileManager {
    type File<'a>: MutableFile
    where
        Self: 'a;

    fn exists(&self, path: &Path) -> bool;

    /// Returns `None` when the file cannot be created at all.
    fn create_file(&self, path: &Path) -> Option<Self::File<'_>>;

    fn update_file(&self, path: &Path) -> Self::File<'_>;

    /// Current contents of an existing file.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Handle to a file being created or updated.
///
/// Bytes written are committed no later than drop. Call `flush` to observe
/// commit errors.
pub trait MutableFile: Write {
    fn canonical_path(&self) -> &Path;
}
