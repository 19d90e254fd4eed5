use thiserror::Error;

/// Errors raised while laying out an archive.
///
/// Every variant except `Io` is a format limit of plain (non-ZIP64) ZIP and is
/// detected before the output buffer is allocated.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("too many entries: {count} (a ZIP without ZIP64 holds at most 65535)")]
    TooManyEntries { count: usize },
    #[error("file name too long: {len} bytes for {name:?} (max 65535)")]
    NameTooLong { name: String, len: usize },
    #[error("entry {name:?} is {size} bytes, larger than 4 GiB")]
    EntryTooLarge { name: String, size: usize },
    #[error("archive would be {size} bytes, offsets exceed 4 GiB")]
    ArchiveTooLarge { size: u64 },
    #[error("failed to write archive record: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
