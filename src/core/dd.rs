// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::error::Result;
use crate::utils::{write_u32, write_u64};

use std::io::Write;

pub const SIGNATURE: u32 = crate::spec::consts::DATA_DESCRIPTOR_SIGNATURE;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#439
raw! {
    RawDataDescriptor {
        crc_32, u32, write_u32,
        compressed_size, u32, write_u32,
        uncompressed_size, u32, write_u32
    }
}

raw! {
    RawZip64DataDescriptor {
        crc_32, u32, write_u32,
        compressed_size, u64, write_u64,
        uncompressed_size, u64, write_u64
    }
}

#[derive(Clone, Debug)]
pub enum DataDescriptor {
    Standard(RawDataDescriptor),
    Zip64(RawZip64DataDescriptor),
}

/// Writes a data descriptor to the provided writer.
///
/// This function does so by:
/// - writing the signature of the data descriptor
/// - writing the raw data descriptor, in whichever width it was built with
pub fn write(mut writer: impl Write, descriptor: &DataDescriptor) -> Result<()> {
    write_u32(&mut writer, SIGNATURE)?;

    match descriptor {
        DataDescriptor::Standard(raw) => raw.raw_write(&mut writer),
        DataDescriptor::Zip64(raw) => raw.raw_write(&mut writer),
    }
}
