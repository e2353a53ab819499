use std::path::PathBuf;

/// A class or interface known to the code generator.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeDetails {
    declared_by_metadata_id: String,
    name: String,
}

impl TypeDetails {
    pub fn new(declared_by_metadata_id: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDetails {
            declared_by_metadata_id: declared_by_metadata_id.into(),
            name: name.into(),
        }
    }

    pub fn declared_by_metadata_id(&self) -> &str {
        &self.declared_by_metadata_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Maps a type's metadata id to the file it lives in.
pub trait TypeLocationService {
    fn physical_location_canonical_path(&self, metadata_id: &str) -> Option<PathBuf>;
}

/// Renders the full source of a compilation unit.
pub trait PhysicalTypeMetadataProvider {
    fn compilation_unit_contents(&self, type_details: &TypeDetails) -> String;
}

impl<T> TypeLocationService for &T
where
    T: TypeLocationService + ?Sized,
{
    fn physical_location_canonical_path(&self, metadata_id: &str) -> Option<PathBuf> {
        (**self).physical_location_canonical_path(metadata_id)
    }
}

impl<T> PhysicalTypeMetadataProvider for &T
where
    T: PhysicalTypeMetadataProvider + ?Sized,
{
    fn compilation_unit_contents(&self, type_details: &TypeDetails) -> String {
        (**self).compilation_unit_contents(type_details)
    }
}
