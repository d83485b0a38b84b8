// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::error::Result;
use crate::utils::{write_bytes, write_u16, write_u32};

use std::io::Write;

pub const SIGNATURE: u32 = crate::spec::consts::EOCDR_SIGNATURE;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16, write_u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16, write_u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16, write_u16,
        total_number_of_entries_in_the_central_directory, u16, write_u16,
        size_of_the_central_directory, u32, write_u32,
        offset_of_start_of_central_directory, u32, write_u32,
        zip_file_comment_length, u16, write_u16
    }
}

#[derive(Clone, Debug)]
pub struct EndOfCentralDirectoryRecord<'a> {
    pub raw: RawEndOfCentralDirectoryRecord,
    pub zip_file_comment: &'a [u8],
}

/// Writes the end of central directory record to the given writer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
/// - writing the zip file comment
pub fn write(mut writer: impl Write, record: &EndOfCentralDirectoryRecord<'_>) -> Result<()> {
    write_u32(&mut writer, SIGNATURE)?;

    record.raw.raw_write(&mut writer)?;
    write_bytes(&mut writer, record.zip_file_comment)?;

    Ok(())
}
