use std::io::{Cursor, Write};

use tracing::debug;

use crate::error::Result;

use super::entry::FileEntry;
use super::layout::ArchiveLayout;
use super::structures::{CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader};

impl ArchiveLayout<'_> {
    /// Emit the archive into a single buffer of exactly [`total_len`] bytes.
    ///
    /// Records are written in order: every local header with its name and
    /// data, then the central directory, then the EOCD record.
    ///
    /// [`total_len`]: ArchiveLayout::total_len
    pub fn write(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.total_len()];
        let mut cursor = Cursor::new(&mut buf[..]);

        for entry in self.entries() {
            LocalFileHeader::stored(entry.crc32, entry.size(), entry.name_len())
                .write_to(&mut cursor)?;
            cursor.write_all(entry.name)?;
            cursor.write_all(entry.data)?;
        }
        debug_assert_eq!(cursor.position(), self.cd_offset() as u64);

        for entry in self.entries() {
            CentralDirectoryHeader::stored(
                entry.crc32,
                entry.size(),
                entry.name_len(),
                entry.lfh_offset,
            )
            .write_to(&mut cursor)?;
            cursor.write_all(entry.name)?;
        }
        debug_assert_eq!(
            cursor.position(),
            self.cd_offset() as u64 + self.cd_size() as u64
        );

        EndOfCentralDirectory::new(self.entry_count(), self.cd_size(), self.cd_offset())
            .write_to(&mut cursor)?;
        debug_assert_eq!(cursor.position() as usize, self.total_len());

        Ok(buf)
    }
}

/// Collects entries and produces a store-only ZIP archive.
///
/// ## Example
///
/// ```
/// use storezip::ArchiveBuilder;
///
/// let mut builder = ArchiveBuilder::new();
/// builder.add("students.csv", "id,name\n1,Ana\n");
/// builder.add("incidents.csv", "id,student,kind\n");
/// let archive = builder.build()?;
/// assert_eq!(&archive[0..4], b"PK\x03\x04");
/// # Ok::<(), storezip::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    entries: Vec<FileEntry>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries keep the order they were added in.
    pub fn add(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> &mut Self {
        self.entries.push(FileEntry::new(name, data));
        self
    }

    pub fn push(&mut self, entry: FileEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the archive. The builder is left untouched and can be reused.
    pub fn build(&self) -> Result<Vec<u8>> {
        build(&self.entries)
    }
}

impl FromIterator<FileEntry> for ArchiveBuilder {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build a store-only ZIP archive from `entries`, in order.
///
/// The result is allocated once at its final size. An empty slice yields the
/// 22-byte empty archive.
pub fn build(entries: &[FileEntry]) -> Result<Vec<u8>> {
    let layout = ArchiveLayout::plan(entries)?;
    let archive = layout.write()?;
    debug!(entries = entries.len(), bytes = archive.len(), "built archive");
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc32;

    fn u16_at(buf: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([buf[at], buf[at + 1]])
    }

    fn u32_at(buf: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
    }

    #[test]
    fn empty_archive() {
        let archive = build(&[]).unwrap();
        assert_eq!(archive.len(), 22);
        assert_eq!(u32_at(&archive, 0), 0x0605_4B50);
        assert_eq!(u16_at(&archive, 8), 0);
        assert_eq!(u16_at(&archive, 10), 0);
        assert_eq!(u32_at(&archive, 12), 0);
        assert_eq!(u32_at(&archive, 16), 0);
    }

    #[test]
    fn single_file() {
        let archive = build(&[FileEntry::new("a.txt", "hello")]).unwrap();

        assert_eq!(archive.len(), (30 + 5 + 5) + (46 + 5) + 22);
        assert_eq!(u32_at(&archive, 0), 0x0403_4B50);
        assert_eq!(u32_at(&archive, 14), crc32::checksum(b"hello"));
        assert_eq!(&archive[30..35], b"a.txt");
        assert_eq!(&archive[35..40], b"hello");

        let cd = 40;
        assert_eq!(u32_at(&archive, cd), 0x0201_4B50);
        assert_eq!(u32_at(&archive, cd + 16), crc32::checksum(b"hello"));
        assert_eq!(u32_at(&archive, cd + 42), 0);
        assert_eq!(&archive[cd + 46..cd + 51], b"a.txt");

        let eocd = archive.len() - 22;
        assert_eq!(u32_at(&archive, eocd), 0x0605_4B50);
        assert_eq!(u16_at(&archive, eocd + 8), 1);
        assert_eq!(u16_at(&archive, eocd + 10), 1);
        assert_eq!(u32_at(&archive, eocd + 12), 51);
        assert_eq!(u32_at(&archive, eocd + 16), 40);
    }

    #[test]
    fn central_directory_points_at_local_headers() {
        let entries: ArchiveBuilder = ["first.csv", "second.csv", "third.csv"]
            .iter()
            .enumerate()
            .map(|(i, name)| FileEntry::new(*name, "row\n".repeat(i + 1)))
            .collect();
        let archive = entries.build().unwrap();

        let eocd = archive.len() - 22;
        let count = u16_at(&archive, eocd + 10) as usize;
        let cd_size = u32_at(&archive, eocd + 12) as usize;
        let cd_offset = u32_at(&archive, eocd + 16) as usize;
        assert_eq!(count, 3);
        assert_eq!(cd_offset + cd_size + 22, archive.len());

        let mut pos = cd_offset;
        for entry in entries.entries() {
            assert_eq!(u32_at(&archive, pos), 0x0201_4B50);
            let name_len = u16_at(&archive, pos + 28) as usize;
            let lfh = u32_at(&archive, pos + 42) as usize;
            assert_eq!(&archive[pos + 46..pos + 46 + name_len], entry.name_bytes());

            assert_eq!(u32_at(&archive, lfh), 0x0403_4B50);
            assert_eq!(u32_at(&archive, lfh + 18), entry.data().len() as u32);
            assert_eq!(u32_at(&archive, lfh + 22), entry.data().len() as u32);
            let data = lfh + 30 + name_len;
            assert_eq!(&archive[data..data + entry.data().len()], entry.data());

            pos += 46 + name_len;
        }
        assert_eq!(pos, cd_offset + cd_size);
    }

    #[test]
    fn builder_is_reusable() {
        let mut builder = ArchiveBuilder::new();
        builder.add("x", "1").add("y", vec![2u8]);
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
        assert!(!builder.is_empty());
    }
}
