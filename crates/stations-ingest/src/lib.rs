//! Station dataset ingestion.
//!
//! Reads the `;`-delimited, UTF-8 encoded station file into a
//! [`Dataset`](stations_model::Dataset). Rows whose arity differs from the
//! header are kept as-is: the validator reports them, the loader does not.

pub mod reader;
pub mod error;

pub use reader::{DELIMITER, read_stations, read_stations_from_reader, validate_encoding};
pub use error::{IngestError, Result};
