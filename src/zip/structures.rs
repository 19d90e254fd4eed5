use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// ZIP version 2.0, the minimum for a plain stored entry.
pub const VERSION_20: u16 = 20;

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
}

impl CompressionMethod {
    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
        }
    }
}

/// Local File Header (LFH) - 30 bytes plus file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: CompressionMethod,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

impl LocalFileHeader {
    pub const SIGNATURE: &'static [u8] = b"PK\x03\x04";
    pub const SIZE: usize = 30;

    /// Header for an uncompressed entry with zeroed timestamps.
    pub fn stored(crc32: u32, size: u32, file_name_length: u16) -> Self {
        Self {
            version_needed: VERSION_20,
            flags: 0,
            compression_method: CompressionMethod::Stored,
            last_mod_time: 0,
            last_mod_date: 0,
            crc32,
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
        }
    }

    /// Write the fixed part of the header. The file name follows separately.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(Self::SIGNATURE)?;
        w.write_u16::<LittleEndian>(self.version_needed)?;
        w.write_u16::<LittleEndian>(self.flags)?;
        w.write_u16::<LittleEndian>(self.compression_method.as_u16())?;
        w.write_u16::<LittleEndian>(self.last_mod_time)?;
        w.write_u16::<LittleEndian>(self.last_mod_date)?;
        w.write_u32::<LittleEndian>(self.crc32)?;
        w.write_u32::<LittleEndian>(self.compressed_size)?;
        w.write_u32::<LittleEndian>(self.uncompressed_size)?;
        w.write_u16::<LittleEndian>(self.file_name_length)?;
        w.write_u16::<LittleEndian>(self.extra_field_length)?;
        Ok(())
    }
}

/// Central Directory File Header (CDFH) - 46 bytes plus file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralDirectoryHeader {
    pub version_made_by: u16,
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: CompressionMethod,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_comment_length: u16,
    pub disk_number_start: u16,
    pub internal_attrs: u16,
    pub external_attrs: u32,
    pub lfh_offset: u32,
}

impl CentralDirectoryHeader {
    pub const SIGNATURE: &'static [u8] = b"PK\x01\x02";
    pub const SIZE: usize = 46;

    /// Directory record matching [`LocalFileHeader::stored`] at `lfh_offset`.
    pub fn stored(crc32: u32, size: u32, file_name_length: u16, lfh_offset: u32) -> Self {
        Self {
            version_made_by: VERSION_20,
            version_needed: VERSION_20,
            flags: 0,
            compression_method: CompressionMethod::Stored,
            last_mod_time: 0,
            last_mod_date: 0,
            crc32,
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_number_start: 0,
            internal_attrs: 0,
            external_attrs: 0,
            lfh_offset,
        }
    }

    /// Write the fixed part of the header. The file name follows separately.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(Self::SIGNATURE)?;
        w.write_u16::<LittleEndian>(self.version_made_by)?;
        w.write_u16::<LittleEndian>(self.version_needed)?;
        w.write_u16::<LittleEndian>(self.flags)?;
        w.write_u16::<LittleEndian>(self.compression_method.as_u16())?;
        w.write_u16::<LittleEndian>(self.last_mod_time)?;
        w.write_u16::<LittleEndian>(self.last_mod_date)?;
        w.write_u32::<LittleEndian>(self.crc32)?;
        w.write_u32::<LittleEndian>(self.compressed_size)?;
        w.write_u32::<LittleEndian>(self.uncompressed_size)?;
        w.write_u16::<LittleEndian>(self.file_name_length)?;
        w.write_u16::<LittleEndian>(self.extra_field_length)?;
        w.write_u16::<LittleEndian>(self.file_comment_length)?;
        w.write_u16::<LittleEndian>(self.disk_number_start)?;
        w.write_u16::<LittleEndian>(self.internal_attrs)?;
        w.write_u32::<LittleEndian>(self.external_attrs)?;
        w.write_u32::<LittleEndian>(self.lfh_offset)?;
        Ok(())
    }
}

/// End of Central Directory (EOCD) - 22 bytes, no comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfCentralDirectory {
    pub disk_number: u16,
    pub disk_with_cd: u16,
    pub disk_entries: u16,
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
    pub comment_len: u16,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    /// Single-disk trailer for `entries` records.
    pub fn new(entries: u16, cd_size: u32, cd_offset: u32) -> Self {
        Self {
            disk_number: 0,
            disk_with_cd: 0,
            disk_entries: entries,
            total_entries: entries,
            cd_size,
            cd_offset,
            comment_len: 0,
        }
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(Self::SIGNATURE)?;
        w.write_u16::<LittleEndian>(self.disk_number)?;
        w.write_u16::<LittleEndian>(self.disk_with_cd)?;
        w.write_u16::<LittleEndian>(self.disk_entries)?;
        w.write_u16::<LittleEndian>(self.total_entries)?;
        w.write_u32::<LittleEndian>(self.cd_size)?;
        w.write_u32::<LittleEndian>(self.cd_offset)?;
        w.write_u16::<LittleEndian>(self.comment_len)?;
        Ok(())
    }
}
