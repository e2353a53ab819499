use crate::banner::Banner;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs;
use crate::manager::{FileManager, MutableFile};
use crate::metadata::{PhysicalTypeMetadataProvider, TypeDetails, TypeLocationService};
use crate::naming;
use std::path::{Path, PathBuf};

/// What a write did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The destination was absent and has been created.
    Created,
    /// The destination existed with different contents and has been replaced.
    Updated,
    /// The destination already held exactly these contents.
    Unchanged,
    /// The destination exists and may not be overwritten.
    Skipped,
}

/// A single write, built per call.
#[derive(Clone, Debug)]
pub struct WriteRequest {
    pub destination: PathBuf,
    pub contents: String,
    pub overwrite: bool,
    pub include_warning: bool,
}

impl WriteRequest {
    /// Overwrites an existing file, without a banner.
    pub fn new(destination: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        WriteRequest {
            destination: destination.into(),
            contents: contents.into(),
            overwrite: true,
            include_warning: false,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn include_warning(mut self, include_warning: bool) -> Self {
        self.include_warning = include_warning;
        self
    }
}

/// Writes files only when their contents change.
///
/// `M` owns the files, `L` locates types on disk and `P` renders them. Callers
/// that only write plain paths can pass `()` for `L` and `P`.
pub struct FileWriter<M, L = (), P = ()> {
    file_manager: M,
    type_location: L,
    metadata_provider: P,
    config: Config,
    banner: Banner,
}

impl<M: FileManager> FileWriter<M> {
    pub fn new(file_manager: M) -> Self {
        FileWriter::with_collaborators(file_manager, (), ())
    }
}

impl<M, L, P> FileWriter<M, L, P>
where
    M: FileManager,
{
    pub fn with_collaborators(file_manager: M, type_location: L, metadata_provider: P) -> Self {
        FileWriter {
            file_manager,
            type_location,
            metadata_provider,
            config: Config::default(),
            banner: Banner::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.banner = Banner::new(&config.tool);
        self.config = config;
        self
    }

    pub fn file_manager(&self) -> &M {
        &self.file_manager
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Writes `contents` to `destination` unless it already holds exactly
    /// that.
    pub fn write(&self, destination: impl AsRef<Path>, contents: &str) -> Result<Outcome> {
        self.write_contents(destination.as_ref(), contents, true)
    }

    pub fn submit(&self, request: WriteRequest) -> Result<Outcome> {
        let WriteRequest {
            destination,
            contents,
            overwrite,
            include_warning,
        } = request;

        let contents = if include_warning {
            self.banner.prepend(&contents)
        } else {
            contents
        };
        self.write_contents(&destination, &contents, overwrite)
    }

    fn write_contents(&self, destination: &Path, contents: &str, overwrite: bool) -> Result<Outcome> {
        if destination.as_os_str().is_empty() {
            return Err(Error::EmptyDestination);
        }

        let (file, outcome) = if self.file_manager.exists(destination) {
            if !overwrite {
                tracing::debug!(path = %destination.display(), "exists and may not be overwritten");
                return Ok(Outcome::Skipped);
            }

            let existing = fs::read_existing(&self.file_manager, destination);
            if existing.as_deref() == Some(contents) {
                tracing::debug!(path = %destination.display(), "contents unchanged");
                return Ok(Outcome::Unchanged);
            }

            let file = self.file_manager.update_file(destination);
            (file, Outcome::Updated)
        } else {
            let file = self
                .file_manager
                .create_file(destination)
                .ok_or_else(|| Error::CreateFile(destination.to_owned()))?;
            (file, Outcome::Created)
        };

        output(file, contents)?;
        tracing::debug!(path = %destination.display(), ?outcome, "wrote file");
        Ok(outcome)
    }
}

fn output<F: MutableFile>(mut file: F, contents: &str) -> Result<()> {
    fs::copy(contents.as_bytes(), &mut file).map_err(|source| Error::Output {
        path: file.canonical_path().to_owned(),
        source,
    })
}

impl<M, L, P> FileWriter<M, L, P>
where
    M: FileManager,
    L: TypeLocationService,
    P: PhysicalTypeMetadataProvider,
{
    /// Writes a type once. An existing file is left alone unless its name
    /// marks it as generated.
    pub fn write_type(&self, type_details: &TypeDetails) -> Result<Outcome> {
        self.write_type_with_warning(type_details, false)
    }

    /// Writes a type, prefixed with the warning banner if `include_warning`.
    ///
    /// Config files never get the banner and generated sources always do.
    /// Files without the banner are written once and never touched again;
    /// files with it are regenerated whenever their contents change.
    pub fn write_type_with_warning(
        &self,
        type_details: &TypeDetails,
        include_warning: bool,
    ) -> Result<Outcome> {
        let metadata_id = type_details.declared_by_metadata_id();
        let destination = self
            .type_location
            .physical_location_canonical_path(metadata_id)
            .ok_or_else(|| Error::UnknownLocation(metadata_id.to_owned()))?;

        let include_warning = naming::include_warning(&destination, include_warning, &self.config);
        let contents = self
            .metadata_provider
            .compilation_unit_contents(type_details);

        if !include_warning && self.file_manager.exists(&destination) {
            tracing::debug!(
                path = %destination.display(),
                type_name = type_details.name(),
                "not regenerating hand-maintained file"
            );
            return Ok(Outcome::Skipped);
        }

        self.submit(
            WriteRequest::new(destination, contents)
                .overwrite(include_warning)
                .include_warning(include_warning),
        )
    }

    /// Writes each type in order with [`write_type`](Self::write_type),
    /// stopping at the first error.
    pub fn write_types(&self, type_details: &[TypeDetails]) -> Result<Vec<Outcome>> {
        type_details
            .iter()
            .map(|type_details| self.write_type(type_details))
            .collect()
    }

    /// Writes each type in order with
    /// [`write_type_with_warning`](Self::write_type_with_warning), stopping at
    /// the first error.
    pub fn write_types_with_warning(
        &self,
        type_details: &[TypeDetails],
        include_warning: bool,
    ) -> Result<Vec<Outcome>> {
        type_details
            .iter()
            .map(|type_details| self.write_type_with_warning(type_details, include_warning))
            .collect()
    }
}
