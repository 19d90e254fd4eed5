//! ZIP archive construction.
//!
//! This module writes store-only (uncompressed) ZIP archives from in-memory
//! payloads. The whole archive is sized before anything is written, so the
//! output is a single allocation with no growth or copying.
//!
//! ## Architecture
//!
//! - [`structures`]: fixed-size records (local header, central directory
//!   header, EOCD) and their little-endian encodings
//! - [`layout`]: first pass computing checksums, offsets and the total size
//! - [`writer`]: emits the records into the pre-sized buffer
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers followed by each file's data
//! 2. Central Directory with metadata and the local header offset of every file
//! 3. End of Central Directory (EOCD) record at the end
//!
//! ## Limitations
//!
//! - STORED only, no DEFLATE
//! - No ZIP64: at most 65535 entries, every offset and size below 4 GiB.
//!   Inputs past these limits are rejected with an [`ArchiveError`](crate::ArchiveError).
//! - Timestamps are zero and the UTF-8 name flag (bit 11) is never set, so
//!   strict readers may decode non-ASCII names with the default code page
//! - No encryption, no archive or file comments

mod entry;
mod layout;
mod structures;
mod writer;

pub use entry::FileEntry;
pub use layout::{ArchiveLayout, PreparedEntry};
pub use structures::*;
pub use writer::{ArchiveBuilder, build};
