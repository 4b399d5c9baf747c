//! Output formats for parsed shapes
//!
//! The WKT writer emits the same grammar the parser reads, so writing a tree and parsing
//! the text back yields an equal tree. JSON and YAML output go through the serde
//! `Serialize` impls on the shape types.

pub mod wkt_writer;

pub use wkt_writer::to_wkt;
