use crate::env::Report;
use crate::error::Result;
use crate::manager::{FileManager, MutableFile};
use crate::message;
use crate::path::CanonicalPath;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// [`FileManager`] over the real filesystem.
///
/// Handles buffer what is written to them and replace the file on flush,
/// printing a `Created` or `Updated` line according to the [`Report`] level.
#[derive(Default, Debug)]
pub struct DiskFileManager {
    report: Report,
}

impl DiskFileManager {
    pub fn new() -> Self {
        DiskFileManager::default()
    }

    /// Uses the report level from `GENFILE_REPORT`.
    pub fn from_env() -> Result<Self> {
        Ok(DiskFileManager {
            report: Report::env()?,
        })
    }

    pub fn report(mut self, report: Report) -> Self {
        self.report = report;
        self
    }
}

impl FileManager for DiskFileManager {
    type File<'a> = DiskFile;

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_file(&self, path: &Path) -> Option<DiskFile> {
        if let Some(parent) = path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %error, "failed to create directory");
                return None;
            }
        }

        if let Err(error) = OpenOptions::new().write(true).create_new(true).open(path) {
            tracing::warn!(path = %path.display(), %error, "failed to create file");
            return None;
        }

        Some(DiskFile::new(path, Kind::Create, self.report))
    }

    fn update_file(&self, path: &Path) -> DiskFile {
        DiskFile::new(path, Kind::Update, self.report)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum Kind {
    Create,
    Update,
}

/// Handle returned by [`DiskFileManager`].
#[derive(Debug)]
pub struct DiskFile {
    path: CanonicalPath,
    kind: Kind,
    report: Report,
    buffer: Vec<u8>,
    dirty: bool,
    reported: bool,
}

impl DiskFile {
    fn new(path: &Path, kind: Kind, report: Report) -> Self {
        DiskFile {
            path: CanonicalPath::new(path),
            kind,
            report,
            buffer: Vec::new(),
            dirty: true,
            reported: false,
        }
    }

    fn commit(&mut self) -> io::Result<()> {
        let path = self.path.as_ref();
        let previous = match (self.kind, self.report) {
            (Kind::Update, Report::Verbose) => fs::read_to_string(path).ok(),
            _ => None,
        };

        // Cleared first so that a failed commit is not retried on drop.
        self.dirty = false;
        fs::write(path, &self.buffer)?;

        if !self.reported {
            self.reported = true;
            self.announce(previous.as_deref());
        }
        Ok(())
    }

    fn announce(&self, previous: Option<&str>) {
        let path = self.path.as_ref();
        match (self.report, self.kind) {
            (Report::Quiet, _) => {}
            (_, Kind::Create) => message::created(path),
            (Report::Verbose, Kind::Update) => match (previous, std::str::from_utf8(&self.buffer)) {
                (Some(previous), Ok(current)) => message::updated_diff(path, previous, current),
                _ => message::updated(path),
            },
            (Report::Normal, Kind::Update) => message::updated(path),
        }
    }
}

impl MutableFile for DiskFile {
    fn canonical_path(&self) -> &Path {
        self.path.as_ref()
    }
}

impl Write for DiskFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
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

impl Drop for DiskFile {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(error) = self.commit() {
                tracing::error!(path = %self.path.as_ref().display(), %error, "failed to write file");
            }
        }
    }
}
