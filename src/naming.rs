//! Pure predicates over destination file names.

use crate::config::Config;
use std::path::Path;

fn file_name(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()
}

/// Markup and config files, e.g. `Module.gwt.xml`.
pub fn is_config_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = file_name(path) else {
        return false;
    };
    extensions.iter().any(|extension| {
        let extension = extension.trim_start_matches('.');
        !extension.is_empty()
            && name
                .strip_suffix(extension)
                .map_or(false, |stem| stem.ends_with('.'))
    })
}

/// Sources owned entirely by the tool, e.g. `ProxyFoo_Roo_Gwt.java`.
pub fn is_generated_source(path: &Path, suffix: &str) -> bool {
    !suffix.is_empty() && file_name(path).map_or(false, |name| name.ends_with(suffix))
}

/// Whether a file written to `path` carries the warning banner, given what the
/// caller asked for.
///
/// Config files never do. Generated sources always do, which takes precedence.
pub fn include_warning(path: &Path, requested: bool, config: &Config) -> bool {
    let mut include = requested;
    include &= !is_config_file(path, &config.config_extensions);
    include |= is_generated_source(path, &config.generated_suffix);
    include
}
