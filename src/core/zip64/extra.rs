// Copyright Cognite AS, 2023

//! The ZIP64 extended information extra field, in the two shapes this crate writes.
//!
//! https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#453

use crate::core::edf::RawExtensibleDataField;
use crate::error::Result;
use crate::spec::consts::{
    ZIP64_CENTRAL_EXTRA_FIELD_DATA_SIZE, ZIP64_EXTRA_FIELD_HEADER_ID, ZIP64_LOCAL_EXTRA_FIELD_DATA_SIZE,
};
use crate::utils::{write_u32, write_u64};

use std::io::Write;

/// The local header variant, carrying only the two sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalZip64ExtraField {
    pub uncompressed_size: u64,
    pub compressed_size: u64,
}

/// The central directory variant, which additionally carries the local header offset and a disk number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CentralZip64ExtraField {
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    pub relative_header_offset: u64,
    pub disk_start_number: u32,
}

/// Writes the local header variant of the ZIP64 extra field.
pub fn write_local(mut writer: impl Write, field: &LocalZip64ExtraField) -> Result<()> {
    let header =
        RawExtensibleDataField { header_id: ZIP64_EXTRA_FIELD_HEADER_ID, data_size: ZIP64_LOCAL_EXTRA_FIELD_DATA_SIZE };

    header.raw_write(&mut writer)?;
    write_u64(&mut writer, field.uncompressed_size)?;
    write_u64(&mut writer, field.compressed_size)?;

    Ok(())
}

/// Writes the central directory variant of the ZIP64 extra field.
pub fn write_central(mut writer: impl Write, field: &CentralZip64ExtraField) -> Result<()> {
    let header = RawExtensibleDataField {
        header_id: ZIP64_EXTRA_FIELD_HEADER_ID,
        data_size: ZIP64_CENTRAL_EXTRA_FIELD_DATA_SIZE,
    };

    header.raw_write(&mut writer)?;
    write_u64(&mut writer, field.uncompressed_size)?;
    write_u64(&mut writer, field.compressed_size)?;
    write_u64(&mut writer, field.relative_header_offset)?;
    write_u32(&mut writer, field.disk_start_number)?;

    Ok(())
}
