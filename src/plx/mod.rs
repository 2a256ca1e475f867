//! Parsing of *.plx education-plan exports.
//!
//! Submodules:
//! - `io`: quick-xml helpers, builds a lightweight element tree
//! - `plan`: program descriptor and the dictionary passes (competencies,
//!   indicators, subjects)
//! - `hours`: work-type reference table and the hour-record pass
//! - `links`: subject↔competency association pass
//!
//! The export is a database diffgram: flat row collections under one dataset
//! element, joined by ad-hoc key/parent-key attributes with no referential
//! integrity. Rows are matched by local tag name regardless of namespace
//! prefix, since exports from different tool versions bind the prefixes
//! differently.

/// Helpers for reading the XML into an element tree
pub mod io;

/// Program descriptor and dictionary passes: `EducationPlan::load`
mod plan;

/// Hour records: work-type table lookup and per-semester workloads
mod hours;

/// Subject↔competency links with indicator and parent-key fallback
mod links;

pub use io::Element;
pub use plan::{OBJECT_TYPE_GROUP, row_elements};

/// Diffgram envelope namespace of the export.
pub const NS_DIFFGRAM: &str = "urn:schemas-microsoft-com:xml-diffgram-v1";

/// Dataset-metadata namespace of the export.
pub const NS_MSDATA: &str = "urn:schemas-microsoft-com:xml-msdata";

/// Domain namespace of the dataset rows.
pub const NS_MMISDB: &str = "http://tempuri.org/dsMMISDB.xsd";
