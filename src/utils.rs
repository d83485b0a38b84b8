// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::Result;

use std::io::Write;

/// Writes a u16 to the given writer with little endianness.
pub fn write_u16(mut writer: impl Write, value: u16) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes a u32 to the given writer with little endianness.
pub fn write_u32(mut writer: impl Write, value: u32) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes a u64 to the given writer with little endianness.
pub fn write_u64(mut writer: impl Write, value: u64) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes a byte string to the given writer as-is.
pub fn write_bytes(mut writer: impl Write, bytes: &[u8]) -> Result<()> {
    writer.write_all(bytes)?;
    Ok(())
}

/// Runs a write operation against a scratch buffer and returns the buffer.
pub fn encode_to_vec<F>(op: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buffer = Vec::new();
    op(&mut buffer)?;
    Ok(buffer)
}

/// Returns the number of bytes a write operation would produce.
///
/// The operation is run against a throwaway buffer, so callers can size a block (eg. an extra field) from the same
/// code which later emits it.
pub fn probe_size<F>(op: F) -> Result<usize>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    Ok(encode_to_vec(op)?.len())
}
