use std::path::{Path, PathBuf};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Debug)]
pub(crate) struct CanonicalPath(PathBuf);

impl CanonicalPath {
    /// Falls back to the path as given when it does not exist yet.
    pub(crate) fn new(path: &Path) -> Self {
        if let Ok(canonical) = path.canonicalize() {
            CanonicalPath(canonical)
        } else {
            CanonicalPath(path.to_owned())
        }
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[test]
fn test_missing_path_is_kept() {
    let path = Path::new("/nonexistent/genfile/Foo.java");
    assert_eq!(CanonicalPath::new(path).as_ref(), path);
}
