// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP metadata records.
//!
//! Each function emits exactly one self-contained record (or, for the end of central directory, the ZIP64 epilogue
//! followed by the plain record). Callers own everything else: compressing data, computing CRC-32 checksums,
//! tracking offsets and entry counts, and invoking the writers in archive order.
//!
//! # Example
//! ```
//! # use zip_records::write::{
//! #     write_central_directory_file_header, write_end_of_central_directory, write_local_file_header,
//! #     CentralDirectoryFileHeaderOptions, EndOfCentralDirectoryOptions, LocalFileHeaderOptions, OffsetWriter,
//! # };
//! # use zip_records::ZipDateTime;
//! # use std::io::Write;
//! #
//! # fn run() -> zip_records::error::Result<()> {
//! let mut writer = OffsetWriter::new(Vec::<u8>::new());
//!
//! let data = b"This is an example file.";
//! let local = LocalFileHeaderOptions {
//!     filename: b"foo.txt",
//!     compressed_size: data.len() as u64,
//!     uncompressed_size: data.len() as u64,
//!     crc32: 0x0d3c_0c9a, // computed by the caller
//!     mtime: ZipDateTime::new(2024, 3, 2, 12, 0, 0)?,
//!     ..Default::default()
//! };
//!
//! let local_file_header_location = writer.offset();
//! write_local_file_header(&mut writer, &local)?;
//! writer.write_all(data)?;
//!
//! let start_of_central_directory_location = writer.offset();
//! let central = CentralDirectoryFileHeaderOptions::from_local(&local, local_file_header_location);
//! write_central_directory_file_header(&mut writer, &central)?;
//!
//! let eocd = EndOfCentralDirectoryOptions {
//!     start_of_central_directory_location,
//!     central_directory_size: writer.offset() - start_of_central_directory_location,
//!     num_files_in_archive: 1,
//! };
//! write_end_of_central_directory(&mut writer, &eocd)?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod io;
pub mod nonblocking;

pub use io::offset::{AsyncOffsetWriter, OffsetWriter};

use crate::date::ZipDateTime;
use crate::error::{Result, ZipError};
use crate::core::cdr::{CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::core::dd::{DataDescriptor, RawDataDescriptor, RawZip64DataDescriptor};
use crate::core::eocdr::{EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::core::lfh::{LocalFileHeader, RawLocalFileHeader};
use crate::core::zip64::eocdr::RawZip64EndOfCentralDirectoryRecord;
use crate::core::zip64::extra::{CentralZip64ExtraField, LocalZip64ExtraField};
use crate::core::zip64::locator::RawZip64EndOfCentralDirectoryLocator;
use crate::spec::consts::{
    ARCHIVE_COMMENT, DEFAULT_EXTERNAL_ATTRIBUTES, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, ZIP64_EOCDR_SIZE_FIELD,
};
use crate::spec::version::{as_made_by, as_needed_to_extract};
use crate::utils::probe_size;

use std::io::Write;

/// The fields of a local file header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalFileHeaderOptions<'a> {
    /// The file name, written as-is. Must not exceed 65535 bytes.
    pub filename: &'a [u8],
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub crc32: u32,
    pub gp_flags: u16,
    /// The compression method code (eg. 0 for stored, 8 for deflate).
    pub storage_mode: u16,
    pub mtime: ZipDateTime,
}

/// The fields of a central directory file header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CentralDirectoryFileHeaderOptions<'a> {
    /// The file name, written as-is. Must not exceed 65535 bytes.
    pub filename: &'a [u8],
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub crc32: u32,
    pub gp_flags: u16,
    pub storage_mode: u16,
    pub mtime: ZipDateTime,
    /// The absolute offset of this entry's local file header within the archive.
    pub local_file_header_location: u64,
    /// Defaults to [`DEFAULT_EXTERNAL_ATTRIBUTES`] (a regular, non-executable rw-r--r-- file) when `None`.
    pub external_attrs: Option<u32>,
}

impl<'a> CentralDirectoryFileHeaderOptions<'a> {
    /// Constructs the central directory counterpart of a local file header written at the given offset.
    pub fn from_local(local: &LocalFileHeaderOptions<'a>, local_file_header_location: u64) -> Self {
        Self {
            filename: local.filename,
            compressed_size: local.compressed_size,
            uncompressed_size: local.uncompressed_size,
            crc32: local.crc32,
            gp_flags: local.gp_flags,
            storage_mode: local.storage_mode,
            mtime: local.mtime,
            local_file_header_location,
            external_attrs: None,
        }
    }
}

/// The fields of a data descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataDescriptorOptions {
    pub crc32: u32,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
}

/// The archive-wide values the end of central directory record describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndOfCentralDirectoryOptions {
    pub start_of_central_directory_location: u64,
    pub central_directory_size: u64,
    pub num_files_in_archive: u64,
}

/// Writes a local file header, followed by a ZIP64 extra field if either size doesn't fit in 32 bits.
#[tracing::instrument(skip(writer))]
pub fn write_local_file_header(mut writer: impl Write, options: &LocalFileHeaderOptions<'_>) -> Result<()> {
    let file_name_length = file_name_length(options.filename)?;
    let zip64 = exceeds_u32(options.compressed_size) || exceeds_u32(options.uncompressed_size);

    let (compressed_size, uncompressed_size, extra_field_length, zip64_field) = if zip64 {
        tracing::debug!(
            compressed_size = options.compressed_size,
            uncompressed_size = options.uncompressed_size,
            "local file header requires ZIP64"
        );

        let extra_field_length =
            extra_field_length(|buffer| write_zip64_extra_for_local_file_header(buffer, 0, 0))?;
        let field = LocalZip64ExtraField {
            uncompressed_size: options.uncompressed_size,
            compressed_size: options.compressed_size,
        };

        (NON_ZIP64_MAX_SIZE, NON_ZIP64_MAX_SIZE, extra_field_length, Some(field))
    } else {
        (options.compressed_size as u32, options.uncompressed_size as u32, 0, None)
    };

    let header = LocalFileHeader {
        raw: RawLocalFileHeader {
            version_needed_to_extract: as_needed_to_extract(zip64),
            general_purpose_flags: options.gp_flags,
            compression_method: options.storage_mode,
            last_mod_file_time: options.mtime.dos_time(),
            last_mod_file_date: options.mtime.dos_date(),
            crc_32: options.crc32,
            compressed_size,
            uncompressed_size,
            file_name_length,
            extra_field_length,
        },
        file_name: options.filename,
        zip64: zip64_field,
    };

    crate::core::lfh::write(&mut writer, &header)
}

/// Writes a central directory file header, followed by a ZIP64 extra field if either size or the local header
/// offset doesn't fit in 32 bits.
///
/// When ZIP64 is engaged, the disk number start is also set to 0xFFFF. Some unarchivers (notably the macOS Archive
/// Utility) misread the ZIP64 extra field otherwise.
#[tracing::instrument(skip(writer))]
pub fn write_central_directory_file_header(
    mut writer: impl Write,
    options: &CentralDirectoryFileHeaderOptions<'_>,
) -> Result<()> {
    let file_name_length = file_name_length(options.filename)?;
    let zip64 = exceeds_u32(options.local_file_header_location)
        || exceeds_u32(options.compressed_size)
        || exceeds_u32(options.uncompressed_size);

    let header = if zip64 {
        tracing::debug!(
            compressed_size = options.compressed_size,
            uncompressed_size = options.uncompressed_size,
            local_file_header_location = options.local_file_header_location,
            "central directory file header requires ZIP64"
        );

        let extra_field_length =
            extra_field_length(|buffer| write_zip64_extra_for_central_directory_file_header(buffer, 0, 0, 0))?;
        let field = CentralZip64ExtraField {
            uncompressed_size: options.uncompressed_size,
            compressed_size: options.compressed_size,
            relative_header_offset: options.local_file_header_location,
            disk_start_number: 0,
        };

        CentralDirectoryRecord {
            raw: central_raw(options, file_name_length, extra_field_length, true),
            file_name: options.filename,
            zip64: Some(field),
        }
    } else {
        CentralDirectoryRecord {
            raw: central_raw(options, file_name_length, 0, false),
            file_name: options.filename,
            zip64: None,
        }
    };

    crate::core::cdr::write(&mut writer, &header)
}

fn central_raw(
    options: &CentralDirectoryFileHeaderOptions<'_>,
    file_name_length: u16,
    extra_field_length: u16,
    zip64: bool,
) -> RawCentralDirectoryRecord {
    let (compressed_size, uncompressed_size, lh_offset, disk_number_start) = if zip64 {
        (NON_ZIP64_MAX_SIZE, NON_ZIP64_MAX_SIZE, NON_ZIP64_MAX_SIZE, NON_ZIP64_MAX_NUM_FILES)
    } else {
        (
            options.compressed_size as u32,
            options.uncompressed_size as u32,
            options.local_file_header_location as u32,
            0,
        )
    };

    RawCentralDirectoryRecord {
        version_made_by: as_made_by(),
        version_needed_to_extract: as_needed_to_extract(zip64),
        general_purpose_bit_flag: options.gp_flags,
        compression_method: options.storage_mode,
        last_mod_file_time: options.mtime.dos_time(),
        last_mod_file_date: options.mtime.dos_date(),
        crc_32: options.crc32,
        compressed_size,
        uncompressed_size,
        file_name_length,
        extra_field_length,
        file_comment_length: 0,
        disk_number_start,
        internal_file_attributes: 0,
        external_file_attributes: options.external_attrs.unwrap_or(DEFAULT_EXTERNAL_ATTRIBUTES),
        relative_offset_of_local_header: lh_offset,
    }
}

/// Writes a data descriptor.
///
/// Both sizes are written as 8 bytes if either doesn't fit in 32 bits, and as 4 bytes otherwise. This is decided
/// from the sizes alone, independently of whichever layout the matching local file header used.
#[tracing::instrument(skip(writer))]
pub fn write_data_descriptor(mut writer: impl Write, options: &DataDescriptorOptions) -> Result<()> {
    let descriptor = if exceeds_u32(options.compressed_size) || exceeds_u32(options.uncompressed_size) {
        tracing::debug!(
            compressed_size = options.compressed_size,
            uncompressed_size = options.uncompressed_size,
            "data descriptor requires ZIP64"
        );

        DataDescriptor::Zip64(RawZip64DataDescriptor {
            crc_32: options.crc32,
            compressed_size: options.compressed_size,
            uncompressed_size: options.uncompressed_size,
        })
    } else {
        DataDescriptor::Standard(RawDataDescriptor {
            crc_32: options.crc32,
            compressed_size: options.compressed_size as u32,
            uncompressed_size: options.uncompressed_size as u32,
        })
    };

    crate::core::dd::write(&mut writer, &descriptor)
}

/// Writes the end of central directory record, preceded by the ZIP64 end of central directory record and locator
/// when any archive-wide value overflows the classic fields.
///
/// This must be called immediately after the last central directory file header, as the ZIP64 record's offset is
/// derived from the central directory's start and size.
#[tracing::instrument(skip(writer))]
pub fn write_end_of_central_directory(mut writer: impl Write, options: &EndOfCentralDirectoryOptions) -> Result<()> {
    let zip64_eocdr_offset =
        options.start_of_central_directory_location.saturating_add(options.central_directory_size);
    let zip64 = exceeds_u32(options.central_directory_size)
        || exceeds_u32(options.start_of_central_directory_location)
        || exceeds_u32(zip64_eocdr_offset)
        || options.num_files_in_archive > NON_ZIP64_MAX_NUM_FILES as u64;

    if zip64 {
        tracing::debug!(
            start_of_central_directory_location = options.start_of_central_directory_location,
            central_directory_size = options.central_directory_size,
            num_files_in_archive = options.num_files_in_archive,
            zip64_eocdr_offset,
            "end of central directory requires ZIP64"
        );

        let record = RawZip64EndOfCentralDirectoryRecord {
            size_of_record: ZIP64_EOCDR_SIZE_FIELD,
            version_made_by: as_made_by(),
            version_needed: as_needed_to_extract(true),
            number_of_this_disk: 0,
            disk_with_start_of_cd: 0,
            total_entries_in_cd_on_this_disk: options.num_files_in_archive,
            total_entries_in_cd: options.num_files_in_archive,
            size_of_cd: options.central_directory_size,
            offset_start_of_cd: options.start_of_central_directory_location,
        };
        crate::core::zip64::eocdr::write(&mut writer, &record)?;

        let locator = RawZip64EndOfCentralDirectoryLocator {
            disk_with_start_eocdr: 0,
            relative_offset_eocdr: zip64_eocdr_offset,
            total_disks: 1,
        };
        crate::core::zip64::locator::write(&mut writer, &locator)?;
    }

    let (num_entries, size_of_cd, cd_offset) = if zip64 {
        (NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, NON_ZIP64_MAX_SIZE)
    } else {
        (
            options.num_files_in_archive as u16,
            options.central_directory_size as u32,
            options.start_of_central_directory_location as u32,
        )
    };

    let record = EndOfCentralDirectoryRecord {
        raw: RawEndOfCentralDirectoryRecord {
            number_of_this_disk: 0,
            number_of_the_disk_with_the_start_of_the_central_directory: 0,
            total_number_of_entries_in_the_central_directory_on_this_disk: num_entries,
            total_number_of_entries_in_the_central_directory: num_entries,
            size_of_the_central_directory: size_of_cd,
            offset_of_start_of_central_directory: cd_offset,
            zip_file_comment_length: ARCHIVE_COMMENT.len() as u16,
        },
        zip_file_comment: ARCHIVE_COMMENT,
    };

    crate::core::eocdr::write(&mut writer, &record)
}

/// Writes the local file header variant of the ZIP64 extended information extra field (16 bytes of data).
#[tracing::instrument(skip(writer))]
pub fn write_zip64_extra_for_local_file_header(
    writer: impl Write,
    compressed_size: u64,
    uncompressed_size: u64,
) -> Result<()> {
    crate::core::zip64::extra::write_local(writer, &LocalZip64ExtraField { uncompressed_size, compressed_size })
}

/// Writes the central directory variant of the ZIP64 extended information extra field (28 bytes of data).
#[tracing::instrument(skip(writer))]
pub fn write_zip64_extra_for_central_directory_file_header(
    writer: impl Write,
    compressed_size: u64,
    uncompressed_size: u64,
    local_file_header_location: u64,
) -> Result<()> {
    let field = CentralZip64ExtraField {
        uncompressed_size,
        compressed_size,
        relative_header_offset: local_file_header_location,
        disk_start_number: 0,
    };

    crate::core::zip64::extra::write_central(writer, &field)
}

fn exceeds_u32(value: u64) -> bool {
    value > NON_ZIP64_MAX_SIZE as u64
}

fn file_name_length(file_name: &[u8]) -> Result<u16> {
    file_name.len().try_into().map_err(|_| ZipError::FileNameTooLarge(file_name.len()))
}

// Sizes an extra field by running its writer against a scratch buffer rather than hardcoding its length.
fn extra_field_length<F>(op: F) -> Result<u16>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    probe_size(op)?.try_into().map_err(|_| ZipError::ExtraFieldTooLarge)
}
