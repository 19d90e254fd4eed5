//! # storezip
//!
//! Build store-only ZIP archives from named in-memory payloads.
//!
//! The archive is laid out in two passes: the first computes every CRC-32,
//! local header offset and the exact output size, the second writes local
//! headers and data, the central directory and the end-of-central-directory
//! record into one buffer allocated at that size.
//!
//! ## Features
//!
//! - Table-driven CRC-32 with a compile-time table
//! - Exact-size single allocation, no reallocation
//! - Text or binary payloads
//! - Fails fast on inputs that would need ZIP64
//!
//! ## Example
//!
//! ```
//! use storezip::{FileEntry, build};
//!
//! let archive = build(&[
//!     FileEntry::new("students.csv", "id,name\n1,Ana\n"),
//!     FileEntry::new("incidents.csv", "id,student,kind\n"),
//! ])?;
//!
//! // Ends with the EOCD record
//! let eocd = &archive[archive.len() - 22..];
//! assert_eq!(&eocd[0..4], b"PK\x05\x06");
//! # Ok::<(), storezip::ArchiveError>(())
//! ```

pub mod cli;
pub mod crc32;
pub mod error;
pub mod zip;

pub use cli::Cli;
pub use error::ArchiveError;
pub use crate::zip::{ArchiveBuilder, ArchiveLayout, FileEntry, PreparedEntry, build};
