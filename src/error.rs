//! Error handling for the plan loader.
//!
//! Two families only: fatal input problems (missing file, malformed XML,
//! absent required attribute) and course-file problems. Orphaned hour/link
//! records in the export are NOT errors — they are counted in `LoadStats`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a *.plx plan or a course description.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The plan file cannot be opened or read.
    #[error("cannot open education plan {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not well-formed XML.
    #[error("malformed XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// A structurally required element is absent (diffgram envelope,
    /// dataset root or program descriptor).
    #[error("required element <{0}> not found in plan file")]
    MissingElement(&'static str),

    /// A required attribute is absent on an element that was found.
    #[error("required attribute '{attr}' missing on <{elem}>")]
    MissingAttribute { elem: String, attr: &'static str },

    /// An attribute that must hold a number holds something else.
    #[error("attribute '{attr}' holds '{value}', expected a number")]
    BadNumber { attr: &'static str, value: String },

    /// The course description file cannot be opened or read.
    #[error("cannot open course file {}: {source}", .path.display())]
    CourseIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The course description is not valid YAML or misses required keys.
    #[error("invalid course file {}: {source}", .path.display())]
    CourseFormat {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PlanError>;
