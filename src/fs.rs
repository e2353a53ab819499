use crate::manager::{FileManager, MutableFile};
use std::io::{Result, Write};
use std::path::Path;

/// Contents of an existing file, or `None` if it could not be read. Callers
/// treat unreadable as different so that the file is rewritten.
pub(crate) fn read_existing<M>(manager: &M, path: &Path) -> Option<String>
where
    M: FileManager + ?Sized,
{
    match manager.read_to_string(path) {
        Ok(existing) => Some(existing),
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "could not read existing contents");
            None
        }
    }
}

pub(crate) fn copy<F>(contents: &[u8], file: &mut F) -> Result<()>
where
    F: MutableFile + ?Sized,
{
    file.write_all(contents)?;
    file.flush()
}
