//! properties-reader: Java-style `.properties` files as nested, typed configuration
//!
//! Properties text is parsed into a [`Document`] (dotted keys become nested
//! documents, integers and booleans are coerced), documents from several files
//! are merged shallowly in order, and the result is stored under a target key in
//! a [`ConfigStore`](store::ConfigStore).

pub mod config;
pub mod domain;
pub mod merge;
pub mod parse;
pub mod store;
pub mod task;
pub mod utils;

pub use domain::{document_to_json, Document, Value};
pub use merge::{merge, merge_all};
pub use parse::{coerce_scalar, parse_properties};
pub use task::{read_documents, run_task, FileSource, FsSource, TaskError, TaskReport};
