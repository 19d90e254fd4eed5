//! First pass over the entries: checksums, offsets and the exact archive size.
//!
//! Nothing is written here. [`ArchiveLayout::plan`] validates the entries
//! against the limits of plain ZIP and records where every record will land,
//! so that the writer can allocate once and never grow the buffer.

use tracing::{debug, trace};

use crate::crc32;
use crate::error::{ArchiveError, Result};

use super::entry::FileEntry;
use super::structures::{CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader};

/// An entry after the sizing pass. Borrows from its [`FileEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedEntry<'a> {
    pub name: &'a [u8],
    pub data: &'a [u8],
    pub crc32: u32,
    /// Offset of this entry's local file header from the start of the archive
    pub lfh_offset: u32,
}

impl PreparedEntry<'_> {
    /// Length of the name field. Checked against `u16::MAX` during planning.
    pub fn name_len(&self) -> u16 {
        self.name.len() as u16
    }

    /// Stored size of the payload. Checked against `u32::MAX` during planning.
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Bytes this entry occupies in the local section.
    pub fn local_len(&self) -> usize {
        LocalFileHeader::SIZE + self.name.len() + self.data.len()
    }

    /// Bytes this entry occupies in the central directory.
    pub fn central_len(&self) -> usize {
        CentralDirectoryHeader::SIZE + self.name.len()
    }
}

/// Sizes and offsets of a complete archive, computed before any byte is written.
#[derive(Debug, Clone)]
pub struct ArchiveLayout<'a> {
    entries: Vec<PreparedEntry<'a>>,
    cd_offset: u32,
    cd_size: u32,
    total_len: usize,
}

impl<'a> ArchiveLayout<'a> {
    /// Prepare `entries` in order.
    ///
    /// # Errors
    ///
    /// Fails when the entries cannot be described without ZIP64: more than
    /// 65535 entries, a name longer than 65535 bytes, a payload of 4 GiB or
    /// more, or a local header / central directory offset past 4 GiB.
    pub fn plan(entries: &'a [FileEntry]) -> Result<Self> {
        if entries.len() > u16::MAX as usize {
            return Err(ArchiveError::TooManyEntries {
                count: entries.len(),
            });
        }

        let mut prepared = Vec::with_capacity(entries.len());
        let mut local_size: u64 = 0;
        let mut cd_size: u64 = 0;

        for entry in entries {
            let name = entry.name_bytes();
            let data = entry.data();

            if name.len() > u16::MAX as usize {
                return Err(ArchiveError::NameTooLong {
                    name: entry.name().to_string(),
                    len: name.len(),
                });
            }
            if data.len() > u32::MAX as usize {
                return Err(ArchiveError::EntryTooLarge {
                    name: entry.name().to_string(),
                    size: data.len(),
                });
            }
            let lfh_offset = u32::try_from(local_size)
                .map_err(|_| ArchiveError::ArchiveTooLarge { size: local_size })?;

            let item = PreparedEntry {
                name,
                data,
                crc32: crc32::checksum(data),
                lfh_offset,
            };
            trace!(
                name = entry.name(),
                size = data.len(),
                crc32 = item.crc32,
                offset = lfh_offset,
                "prepared entry"
            );

            local_size += item.local_len() as u64;
            cd_size += item.central_len() as u64;
            prepared.push(item);
        }

        let total = local_size + cd_size + EndOfCentralDirectory::SIZE as u64;
        let too_large = || ArchiveError::ArchiveTooLarge { size: total };
        let cd_offset = u32::try_from(local_size).map_err(|_| too_large())?;
        let cd_size = u32::try_from(cd_size).map_err(|_| too_large())?;
        let total_len = usize::try_from(total).map_err(|_| too_large())?;

        debug!(
            entries = prepared.len(),
            cd_offset, cd_size, total_len, "planned archive layout"
        );

        Ok(Self {
            entries: prepared,
            cd_offset,
            cd_size,
            total_len,
        })
    }

    pub fn entries(&self) -> &[PreparedEntry<'a>] {
        &self.entries
    }

    /// Number of entries, as recorded in the EOCD.
    pub fn entry_count(&self) -> u16 {
        self.entries.len() as u16
    }

    /// Offset of the central directory, equal to the size of the local section.
    pub fn cd_offset(&self) -> u32 {
        self.cd_offset
    }

    pub fn cd_size(&self) -> u32 {
        self.cd_size
    }

    /// Exact length of the finished archive.
    pub fn total_len(&self) -> usize {
        self.total_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout() {
        let layout = ArchiveLayout::plan(&[]).unwrap();
        assert!(layout.entries().is_empty());
        assert_eq!(layout.cd_offset(), 0);
        assert_eq!(layout.cd_size(), 0);
        assert_eq!(layout.total_len(), 22);
    }

    #[test]
    fn offsets_start_at_zero_and_increase() {
        let entries = vec![
            FileEntry::new("a.csv", "x,y\n1,2\n"),
            FileEntry::new("empty.csv", ""),
            FileEntry::new("dir/b.csv", vec![7u8; 100]),
        ];
        let layout = ArchiveLayout::plan(&entries).unwrap();
        let offsets: Vec<u32> = layout.entries().iter().map(|e| e.lfh_offset).collect();

        assert_eq!(offsets, vec![0, 30 + 5 + 8, 30 + 5 + 8 + 30 + 9]);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sizes_follow_the_formula() {
        let entries = vec![
            FileEntry::new("one.txt", "hello"),
            FileEntry::new("two.txt", "world!!"),
        ];
        let layout = ArchiveLayout::plan(&entries).unwrap();

        let local: usize = entries
            .iter()
            .map(|e| 30 + e.name().len() + e.data().len())
            .sum();
        let central: usize = entries.iter().map(|e| 46 + e.name().len()).sum();

        assert_eq!(layout.cd_offset() as usize, local);
        assert_eq!(layout.cd_size() as usize, central);
        assert_eq!(layout.total_len(), local + central + 22);
        assert_eq!(
            layout.cd_offset() as usize + layout.cd_size() as usize + 22,
            layout.total_len()
        );
    }

    #[test]
    fn checksums_are_per_entry() {
        let entries = vec![FileEntry::new("a.txt", "hello"), FileEntry::new("b", "")];
        let layout = ArchiveLayout::plan(&entries).unwrap();
        assert_eq!(layout.entries()[0].crc32, 0x3610_A686);
        assert_eq!(layout.entries()[1].crc32, 0);
    }

    #[test]
    fn rejects_too_many_entries() {
        let entries = vec![FileEntry::default(); 65536];
        let err = ArchiveLayout::plan(&entries).unwrap_err();
        assert!(matches!(err, ArchiveError::TooManyEntries { count: 65536 }));
    }

    #[test]
    fn accepts_max_entries() {
        let entries = vec![FileEntry::default(); 65535];
        let layout = ArchiveLayout::plan(&entries).unwrap();
        assert_eq!(layout.entry_count(), 65535);
        assert_eq!(layout.total_len(), 65535 * (30 + 46) + 22);
    }

    #[test]
    fn rejects_long_name() {
        let entries = vec![FileEntry::new("n".repeat(65536), "")];
        let err = ArchiveLayout::plan(&entries).unwrap_err();
        assert!(matches!(err, ArchiveError::NameTooLong { len: 65536, .. }));
    }
}
