//! # Nomgraph: Nomination Network Rendering
//!
//! Nomgraph turns a tabular record of nomination events (candidate,
//! proposer, seconder) into a directed relationship graph and renders it as
//! a single interactive, browser-viewable HTML document with node search.
//!
//! ## Features
//!
//! - **Record reading**: CSV ingestion with upfront required-column
//!   validation; rows pass through otherwise untouched
//! - **Graph building**: two-pass construction so candidacy always outranks
//!   nominator roles, independent of row order
//! - **Interactive export**: vis-network document with role-based coloring,
//!   a physics configuration panel, label search, and double-click web
//!   search, viewable in a browser with no server
//!
//! ## Example
//!
//! ```ignore
//! use nomgraph::{read_records, ExportOptions, NominationGraph};
//!
//! let records = read_records("nominations.csv")?;
//! let graph = NominationGraph::build(&records);
//! nomgraph::export_html(&graph, "nominations_network.html", &ExportOptions::default())?;
//! ```

pub mod error;
pub mod export;
pub mod graph;
pub mod record;

// Re-export key types
pub use error::NominationError;
pub use export::{export_html, ExportOptions};
pub use graph::{NominationGraph, Person, Relation, Role};
pub use record::{read_records, Record, REQUIRED_COLUMNS};
