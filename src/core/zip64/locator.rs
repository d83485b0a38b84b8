// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::error::Result;
use crate::utils::{write_u32, write_u64};

use std::io::Write;

pub const SIGNATURE: u32 = crate::spec::consts::ZIP64_EOCDL_SIGNATURE;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4315
raw! {
    RawZip64EndOfCentralDirectoryLocator {
        // number of the disk with the start of the zip64 end of central directory - 4 bytes
        disk_with_start_eocdr, u32, write_u32,
        // relative offset of the zip64 end of central directory record - 8 bytes
        relative_offset_eocdr, u64, write_u64,
        // total number of disks - 4 bytes
        total_disks, u32, write_u32
    }
}

/// Writes the ZIP64 end of central directory locator to the given writer.
///
/// This function does so by:
/// - writing the signature of the ZIP64 end of central directory locator
/// - writing the raw ZIP64 end of central directory locator
pub fn write(mut writer: impl Write, locator: &RawZip64EndOfCentralDirectoryLocator) -> Result<()> {
    write_u32(&mut writer, SIGNATURE)?;
    locator.raw_write(&mut writer)
}
