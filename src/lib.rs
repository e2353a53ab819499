//! #### &emsp;Write generated files only when they change.
//!
//! A code generator that rewrites every output on every run churns
//! modification times and clobbers files a user has taken
//! over. [`FileWriter`] compares what is about to be written against what is
//! already on disk and touches the file only when the two differ.
//!
//! ```
//! use genfile::{FileWriter, MemoryFileManager, Outcome};
//!
//! let writer = FileWriter::new(MemoryFileManager::new());
//!
//! assert_eq!(writer.write("Foo.java", "class Foo{}")?, Outcome::Created);
//! assert_eq!(writer.write("Foo.java", "class Foo{}")?, Outcome::Unchanged);
//! assert_eq!(writer.write("Foo.java", "class Foo{ int x; }")?, Outcome::Updated);
//! assert_eq!(writer.file_manager().writes(), 2);
//! # Ok::<(), genfile::Error>(())
//! ```
//!
//! <br>
//!
//! # Generated types
//!
//! Given a [`TypeLocationService`] and a [`PhysicalTypeMetadataProvider`], the
//! writer also places whole compilation units. Two kinds of output are
//! distinguished:
//!
//! - Files the tool owns carry a warning banner ([`banner::DEFAULT`]) and are
//!   regenerated whenever their contents change. Any file whose name ends in
//!   the generated suffix (`_Roo_Gwt.java` by default) is one of these.
//!
//! - Everything else is written once and afterwards belongs to the user. Config
//!   and markup files (`.xml` by default) never carry the banner.
//!
//! The suffix, the extensions and the tool named in the banner come from
//! [`Config`], which can be loaded from TOML.
//!
//! <br>
//!
//! # Reporting
//!
//! [`DiskFileManager`] prints a line for every file it creates or updates. Set
//! `GENFILE_REPORT=quiet` to silence it or `GENFILE_REPORT=verbose` to also
//! see a diff of each update (requires the `diff` feature).
//!
//! Every decision is additionally traced at debug level through the
//! [`tracing`](https://docs.rs/tracing) facade.

#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value
)]

#[macro_use]
mod term;

pub mod banner;
mod config;
mod diff;
mod disk;
mod env;
mod error;
mod fs;
mod manager;
mod memory;
mod message;
mod metadata;
pub mod naming;
mod path;
mod writer;

#[cfg(test)]
mod tests;

pub use crate::banner::Banner;
pub use crate::config::Config;
pub use crate::disk::{DiskFile, DiskFileManager};
pub use crate::env::Report;
pub use crate::error::{Error, Result};
pub use crate::manager::{FileManager, MutableFile};
pub use crate::memory::{MemoryFile, MemoryFileManager};
pub use crate::metadata::{PhysicalTypeMetadataProvider, TypeDetails, TypeLocationService};
pub use crate::writer::{FileWriter, Outcome, WriteRequest};
