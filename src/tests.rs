use crate::banner;
use crate::naming;
use crate::{
    Config, Error, FileWriter, MemoryFileManager, Outcome, PhysicalTypeMetadataProvider,
    TypeDetails, TypeLocationService, WriteRequest,
};
use std::cell::RefCell;
use std::collections::BTreeMap as Map;
use std::path::{Path, PathBuf};

macro_rules! test_include_warning {
    ($name:ident $path:literal $requested:literal => $expected:literal) => {
        #[test]
        fn $name() {
            let include = naming::include_warning(Path::new($path), $requested, &Config::default());
            assert_eq!(include, $expected);
        }
    };
}

test_include_warning!(test_source_not_requested "/src/Foo.java" false => false);
test_include_warning!(test_source_requested "/src/Foo.java" true => true);
test_include_warning!(test_config_requested "/src/Module.gwt.xml" true => false);
test_include_warning!(test_config_not_requested "/src/Module.gwt.xml" false => false);
test_include_warning!(test_generated_not_requested "/src/FooProxy_Roo_Gwt.java" false => true);
test_include_warning!(test_generated_requested "/src/FooProxy_Roo_Gwt.java" true => true);
test_include_warning!(test_suffix_on_directory "/src/x_Roo_Gwt.java/Foo.java" false => false);
test_include_warning!(test_extension_without_dot "/src/Fooxml" true => true);

#[test]
fn test_custom_conventions() {
    let extensions = ["toml".to_owned(), "json".to_owned()];
    assert!(naming::is_config_file(Path::new("Cargo.toml"), &extensions));
    assert!(naming::is_config_file(Path::new("a/b/package.json"), &extensions));
    assert!(!naming::is_config_file(Path::new("Module.gwt.xml"), &extensions));

    let dotted = [".xml".to_owned()];
    assert!(naming::is_config_file(Path::new("Module.gwt.xml"), &dotted));
    assert!(!naming::is_config_file(Path::new("Fooxml"), &dotted));
    assert!(!naming::is_config_file(Path::new("Foo."), &[".".to_owned()]));

    assert!(naming::is_generated_source(Path::new("src/foo_gen.rs"), "_gen.rs"));
    assert!(!naming::is_generated_source(Path::new("src/foo.rs"), "_gen.rs"));
    assert!(!naming::is_generated_source(Path::new("src/foo.rs"), ""));
}

#[derive(Default)]
struct Project {
    types: RefCell<Map<String, (PathBuf, String)>>,
}

impl Project {
    fn with(self, id: &str, path: &str, source: &str) -> Self {
        self.types
            .borrow_mut()
            .insert(id.to_owned(), (PathBuf::from(path), source.to_owned()));
        self
    }

    fn set_source(&self, id: &str, source: &str) {
        if let Some(entry) = self.types.borrow_mut().get_mut(id) {
            entry.1 = source.to_owned();
        }
    }
}

impl TypeLocationService for Project {
    fn physical_location_canonical_path(&self, metadata_id: &str) -> Option<PathBuf> {
        self.types.borrow().get(metadata_id).map(|(path, _)| path.clone())
    }
}

impl PhysicalTypeMetadataProvider for Project {
    fn compilation_unit_contents(&self, type_details: &TypeDetails) -> String {
        self.types
            .borrow()
            .get(type_details.declared_by_metadata_id())
            .map(|(_, source)| source.clone())
            .unwrap_or_default()
    }
}

fn project() -> Project {
    Project::default()
        .with("Foo", "/src/Foo.java", "class Foo {}")
        .with("FooProxy", "/src/FooProxy_Roo_Gwt.java", "interface FooProxy {}")
        .with("Module", "/src/Module.gwt.xml", "<module/>")
}

fn details(id: &str) -> TypeDetails {
    TypeDetails::new(id, id)
}

#[test]
fn test_write_once_then_skip_identical() {
    let writer = FileWriter::new(MemoryFileManager::new());

    assert_eq!(writer.write("Foo.java", "class Foo{}").unwrap(), Outcome::Created);
    let files = writer.file_manager();
    assert_eq!(files.contents("Foo.java").as_deref(), Some("class Foo{}"));
    assert_eq!(files.writes(), 1);

    assert_eq!(writer.write("Foo.java", "class Foo{}").unwrap(), Outcome::Unchanged);
    assert_eq!(files.writes(), 1);

    let outcome = writer.write("Foo.java", "class Foo{ int x; }").unwrap();
    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(files.contents("Foo.java").as_deref(), Some("class Foo{ int x; }"));
    assert_eq!(files.writes(), 2);
}

#[test]
fn test_empty_contents() {
    let writer = FileWriter::new(MemoryFileManager::new());

    assert_eq!(writer.write("Empty.java", "").unwrap(), Outcome::Created);
    assert_eq!(writer.file_manager().contents("Empty.java").as_deref(), Some(""));
    assert_eq!(writer.write("Empty.java", "").unwrap(), Outcome::Unchanged);
    assert_eq!(writer.file_manager().writes(), 1);
}

#[test]
fn test_no_overwrite() {
    let files = MemoryFileManager::new();
    files.insert("Foo.java", "class Foo {}");
    let writer = FileWriter::new(files);

    let request = WriteRequest::new("Foo.java", "class Bar {}").overwrite(false);
    assert_eq!(writer.submit(request).unwrap(), Outcome::Skipped);
    assert_eq!(writer.file_manager().contents("Foo.java").as_deref(), Some("class Foo {}"));

    // Overwrite only matters for files that already exist.
    let request = WriteRequest::new("Bar.java", "class Bar {}").overwrite(false);
    assert_eq!(writer.submit(request).unwrap(), Outcome::Created);
    assert_eq!(writer.file_manager().writes(), 1);
}

#[test]
fn test_unreadable_file_is_rewritten() {
    let files = MemoryFileManager::new();
    files.insert("Foo.java", "class Foo {}");
    files.mark_unreadable("Foo.java");
    let writer = FileWriter::new(files);

    assert_eq!(writer.write("Foo.java", "class Foo {}").unwrap(), Outcome::Updated);
    assert_eq!(writer.file_manager().writes(), 1);
}

#[test]
fn test_refused_create() {
    let files = MemoryFileManager::new();
    files.refuse_create(true);
    let writer = FileWriter::new(files);

    let err = writer.write("Foo.java", "class Foo {}").unwrap_err();
    assert!(matches!(&err, Error::CreateFile(path) if path == Path::new("Foo.java")));
    assert_eq!(err.to_string(), "could not create output file 'Foo.java'");
    assert_eq!(writer.file_manager().writes(), 0);
}

#[test]
fn test_failed_output() {
    let files = MemoryFileManager::new();
    files.insert("Foo.java", "class Foo {}");
    files.fail_writes(true);
    let writer = FileWriter::new(files);

    let err = writer.write("Foo.java", "class Bar {}").unwrap_err();
    assert_eq!(err.to_string(), "could not output 'Foo.java'");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(writer.file_manager().contents("Foo.java").as_deref(), Some("class Foo {}"));
    assert_eq!(writer.file_manager().writes(), 0);
}

#[test]
fn test_failed_commit_is_not_retried() {
    let files = MemoryFileManager::new();
    files.insert("Foo.java", "class Foo {}");
    files.fail_commits(true);
    let writer = FileWriter::new(files);

    let err = writer.write("Foo.java", "class Bar {}").unwrap_err();
    assert!(matches!(&err, Error::Output { path, .. } if path == Path::new("Foo.java")));

    // The handle has been dropped by now without a second commit.
    let files = writer.file_manager();
    assert_eq!(files.commit_attempts(), 1);
    assert_eq!(files.writes(), 0);
    assert_eq!(files.contents("Foo.java").as_deref(), Some("class Foo {}"));
}

#[test]
fn test_empty_destination() {
    let writer = FileWriter::new(MemoryFileManager::new());
    let err = writer.write("", "class Foo {}").unwrap_err();
    assert!(matches!(err, Error::EmptyDestination));
}

#[test]
fn test_request_with_warning() {
    let writer = FileWriter::new(MemoryFileManager::new());

    let request = WriteRequest::new("Foo.java", "class Foo {}").include_warning(true);
    assert_eq!(writer.submit(request.clone()).unwrap(), Outcome::Created);
    let expected = format!("{}class Foo {{}}", banner::DEFAULT);
    assert_eq!(writer.file_manager().contents("Foo.java"), Some(expected));

    assert_eq!(writer.submit(request).unwrap(), Outcome::Unchanged);
}

#[test]
fn test_generated_source_is_stable() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);
    let proxy = details("FooProxy");

    assert_eq!(writer.write_type(&proxy).unwrap(), Outcome::Created);
    let expected = format!("{}interface FooProxy {{}}", banner::DEFAULT);
    let path = "/src/FooProxy_Roo_Gwt.java";
    assert_eq!(writer.file_manager().contents(path), Some(expected));

    // The banner is part of both sides of the comparison, so regenerating
    // the same source does not drift.
    assert_eq!(writer.write_type(&proxy).unwrap(), Outcome::Unchanged);
    assert_eq!(writer.write_type(&proxy).unwrap(), Outcome::Unchanged);
    assert_eq!(writer.file_manager().writes(), 1);

    project.set_source("FooProxy", "interface FooProxy { String getName(); }");
    assert_eq!(writer.write_type(&proxy).unwrap(), Outcome::Updated);
    assert_eq!(writer.file_manager().writes(), 2);
}

#[test]
fn test_config_file_never_has_banner() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);
    let module = details("Module");

    let outcome = writer.write_type_with_warning(&module, true).unwrap();
    assert_eq!(outcome, Outcome::Created);
    let path = "/src/Module.gwt.xml";
    assert_eq!(writer.file_manager().contents(path).as_deref(), Some("<module/>"));

    // Without the banner the file is not ours to regenerate.
    project.set_source("Module", "<module rename-to=\"app\"/>");
    let outcome = writer.write_type_with_warning(&module, true).unwrap();
    assert_eq!(outcome, Outcome::Skipped);
    assert_eq!(writer.file_manager().contents(path).as_deref(), Some("<module/>"));
}

#[test]
fn test_hand_maintained_file_is_written_once() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);
    let foo = details("Foo");

    assert_eq!(writer.write_type(&foo).unwrap(), Outcome::Created);
    let path = "/src/Foo.java";
    assert_eq!(writer.file_manager().contents(path).as_deref(), Some("class Foo {}"));

    project.set_source("Foo", "class Foo { int x; }");
    assert_eq!(writer.write_type(&foo).unwrap(), Outcome::Skipped);
    assert_eq!(writer.file_manager().contents(path).as_deref(), Some("class Foo {}"));
    assert_eq!(writer.file_manager().writes(), 1);
}

#[test]
fn test_requested_warning_is_regenerated() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);
    let foo = details("Foo");

    assert_eq!(writer.write_type_with_warning(&foo, true).unwrap(), Outcome::Created);
    project.set_source("Foo", "class Foo { int x; }");
    assert_eq!(writer.write_type_with_warning(&foo, true).unwrap(), Outcome::Updated);

    let expected = format!("{}class Foo {{ int x; }}", banner::DEFAULT);
    assert_eq!(writer.file_manager().contents("/src/Foo.java"), Some(expected));
}

#[test]
fn test_unknown_location() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);

    let err = writer.write_type(&details("Missing")).unwrap_err();
    assert!(matches!(&err, Error::UnknownLocation(id) if id == "Missing"));
}

#[test]
fn test_batch() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);

    let outcomes = writer
        .write_types_with_warning(&[details("Foo"), details("Module")], true)
        .unwrap();
    assert_eq!(outcomes, [Outcome::Created, Outcome::Created]);

    let files = writer.file_manager();
    let foo = files.contents("/src/Foo.java").unwrap();
    assert!(foo.starts_with(banner::DEFAULT));
    assert_eq!(files.contents("/src/Module.gwt.xml").as_deref(), Some("<module/>"));

    let outcomes = writer.write_types(&[details("Foo"), details("FooProxy")]).unwrap();
    assert_eq!(outcomes, [Outcome::Skipped, Outcome::Created]);
}

#[test]
fn test_batch_stops_at_first_error() {
    let project = project();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project);

    let batch = [details("Foo"), details("Missing"), details("FooProxy")];
    let err = writer.write_types(&batch).unwrap_err();
    assert!(matches!(err, Error::UnknownLocation(_)));

    let files = writer.file_manager();
    assert!(files.contents("/src/Foo.java").is_some());
    assert!(files.contents("/src/FooProxy_Roo_Gwt.java").is_none());
}

#[test]
fn test_custom_config() {
    let project = Project::default()
        .with("lexer", "/src/lexer_gen.rs", "pub struct Lexer;")
        .with("manifest", "/Cargo.toml", "[package]");
    let config = Config::from_toml(
        r#"
        tool = "GENFILE"
        generated-suffix = "_gen.rs"
        config-extensions = ["toml"]
        "#,
    )
    .unwrap();
    let writer = FileWriter::with_collaborators(MemoryFileManager::new(), &project, &project)
        .with_config(config);

    writer.write_type(&details("lexer")).unwrap();
    writer.write_type_with_warning(&details("manifest"), true).unwrap();

    let files = writer.file_manager();
    assert_eq!(
        files.contents("/src/lexer_gen.rs").as_deref(),
        Some("// WARNING: DO NOT EDIT THIS FILE. THIS FILE IS MANAGED BY GENFILE.\n\npub struct Lexer;"),
    );
    assert_eq!(files.contents("/Cargo.toml").as_deref(), Some("[package]"));
}
