/// A named payload to be stored in an archive.
///
/// Text and binary data are both accepted; text is stored as its UTF-8 bytes.
///
/// ```
/// use storezip::FileEntry;
///
/// let csv = FileEntry::new("students.csv", "id,name\n1,Ana\n");
/// let raw = FileEntry::new("blob.bin", vec![0u8, 1, 2]);
/// assert_eq!(csv.data(), b"id,name\n1,Ana\n");
/// assert_eq!(raw.name(), "blob.bin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    data: Vec<u8>,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Name as stored in the archive (UTF-8, no general-purpose flag set).
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }
}

impl<N: Into<String>, D: Into<Vec<u8>>> From<(N, D)> for FileEntry {
    fn from((name, data): (N, D)) -> Self {
        Self::new(name, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_utf8_encoded() {
        let entry = FileEntry::new("notes.csv", String::from("é,ü"));
        assert_eq!(entry.data(), "é,ü".as_bytes());
        assert_eq!(entry.data().len(), 5);
    }

    #[test]
    fn default_is_empty() {
        let entry = FileEntry::default();
        assert!(entry.name().is_empty());
        assert!(entry.data().is_empty());
    }

    #[test]
    fn from_tuple() {
        let entry: FileEntry = ("a.txt", &b"hi"[..]).into();
        assert_eq!(entry, FileEntry::new("a.txt", "hi"));
    }
}
