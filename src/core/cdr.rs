// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::core::zip64::extra::CentralZip64ExtraField;
use crate::error::Result;
use crate::utils::{write_bytes, write_u16, write_u32};

use std::io::Write;

pub const SIGNATURE: u32 = crate::spec::consts::CDH_SIGNATURE;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16, write_u16,
        version_needed_to_extract, u16, write_u16,
        general_purpose_bit_flag, u16, write_u16,
        compression_method, u16, write_u16,
        last_mod_file_time, u16, write_u16,
        last_mod_file_date, u16, write_u16,
        crc_32, u32, write_u32,
        compressed_size, u32, write_u32,
        uncompressed_size, u32, write_u32,
        file_name_length, u16, write_u16,
        extra_field_length, u16, write_u16,
        file_comment_length, u16, write_u16,
        disk_number_start, u16, write_u16,
        internal_file_attributes, u16, write_u16,
        external_file_attributes, u32, write_u32,
        relative_offset_of_local_header, u32, write_u32
    }
}

/// A central directory record. File comments are never written, so no comment is carried.
#[derive(Clone, Debug)]
pub struct CentralDirectoryRecord<'a> {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: &'a [u8],
    pub zip64: Option<CentralZip64ExtraField>,
}

/// Writes a central directory record to the given writer.
///
/// This function does so by:
/// - writing the signature of the central directory record
/// - writing the raw central directory record
/// - writing the file name
/// - writing the ZIP64 extra field, if present
pub fn write(mut writer: impl Write, header: &CentralDirectoryRecord<'_>) -> Result<()> {
    write_u32(&mut writer, SIGNATURE)?;

    header.raw.raw_write(&mut writer)?;
    write_bytes(&mut writer, header.file_name)?;

    if let Some(zip64) = &header.zip64 {
        crate::core::zip64::extra::write_central(&mut writer, zip64)?;
    }

    Ok(())
}
