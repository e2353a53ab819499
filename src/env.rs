use crate::error::{Error, Result};
use std::env;

/// How much a [`DiskFileManager`](crate::DiskFileManager) prints as it
/// commits files.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum Report {
    /// Print nothing.
    Quiet,
    /// One line per created or updated file.
    #[default]
    Normal,
    /// Like `Normal`, plus a diff of each update when built with the `diff`
    /// feature.
    Verbose,
}

impl Report {
    /// Reads `GENFILE_REPORT`. An unset variable selects the default.
    pub fn env() -> Result<Self> {
        let Some(var) = env::var_os("GENFILE_REPORT") else {
            return Ok(Report::default());
        };

        match var.as_os_str().to_str() {
            Some("quiet") => Ok(Report::Quiet),
            Some("normal") => Ok(Report::Normal),
            Some("verbose") => Ok(Report::Verbose),
            _ => Err(Error::ReportVar(var)),
        }
    }
}

#[test]
fn test_report_var() {
    // The only test touching GENFILE_REPORT, so no other test observes it.
    for (value, expected) in [
        ("quiet", Report::Quiet),
        ("normal", Report::Normal),
        ("verbose", Report::Verbose),
    ] {
        env::set_var("GENFILE_REPORT", value);
        assert_eq!(Report::env().unwrap(), expected);
    }

    env::set_var("GENFILE_REPORT", "loud");
    let err = Report::env().unwrap_err();
    assert!(matches!(&err, Error::ReportVar(var) if var == "loud"), "{:?}", err);
    assert!(crate::DiskFileManager::from_env().is_err());

    env::remove_var("GENFILE_REPORT");
    assert_eq!(Report::env().unwrap(), Report::Normal);
    assert!(crate::DiskFileManager::from_env().is_ok());
}
