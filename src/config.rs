use crate::error::{Error, Result};
use serde_derive::Deserialize;
use std::fs;
use std::path::Path;

/// Naming conventions and the tool name shown in the warning banner.
///
/// Every key is optional in TOML:
///
/// ```toml
/// tool = "SPRING ROO"
/// generated-suffix = "_Roo_Gwt.java"
/// config-extensions = ["xml"]
/// ```
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Named in the banner: `... THIS FILE IS MANAGED BY <tool>.`
    pub tool: String,
    /// File names ending in this suffix always carry the banner and are always
    /// regenerated.
    pub generated_suffix: String,
    /// Extensions of markup and config files, with or without the leading dot.
    /// These never carry the banner.
    pub config_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tool: "SPRING ROO".to_owned(),
            generated_suffix: "_Roo_Gwt.java".to_owned(),
            config_extensions: vec!["xml".to_owned()],
        }
    }
}

impl Config {
    pub fn from_toml(document: &str) -> Result<Self> {
        Ok(toml::from_str(document)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        Config::from_toml(&document)
    }
}
