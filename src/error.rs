use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("destination path must not be empty")]
    EmptyDestination,
    #[error("could not create output file '{}'", .0.display())]
    CreateFile(PathBuf),
    #[error("could not output '{}'", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no physical location is known for type '{0}'")]
    UnknownLocation(String),
    #[error("failed to read config file '{}'", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unrecognized value of GENFILE_REPORT: {0:?}")]
    ReportVar(OsString),
}

pub type Result<T> = std::result::Result<T, Error>;
