//! I/O module
//!
//! Handles script parsing and state output.
//!
//! # Components
//!
//! - `csv_format` - Record conversion, trace and JSON serialization
//! - `script_reader` - Streaming reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{convert_script_record, write_state_json, ScriptRecord, TraceWriter};
pub use script_reader::ScriptReader;
