// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Asynchronous counterparts of the record writers, acting over [`AsyncWrite`] implementers.
//!
//! Each record is encoded synchronously into a scratch buffer and then written with a single `write_all`, so the
//! bytes produced are identical to those of the synchronous writers.

use crate::error::Result;
use crate::utils::encode_to_vec;
use crate::write::{
    CentralDirectoryFileHeaderOptions, DataDescriptorOptions, EndOfCentralDirectoryOptions, LocalFileHeaderOptions,
};

use futures_lite::io::{AsyncWrite, AsyncWriteExt};

/// Writes a local file header. See [`crate::write::write_local_file_header`].
#[tracing::instrument(skip(writer))]
pub async fn write_local_file_header(
    writer: impl AsyncWrite + Unpin,
    options: &LocalFileHeaderOptions<'_>,
) -> Result<()> {
    let record = encode_to_vec(|buffer| super::write_local_file_header(buffer, options))?;
    write_record(writer, &record).await
}

/// Writes a central directory file header. See [`crate::write::write_central_directory_file_header`].
#[tracing::instrument(skip(writer))]
pub async fn write_central_directory_file_header(
    writer: impl AsyncWrite + Unpin,
    options: &CentralDirectoryFileHeaderOptions<'_>,
) -> Result<()> {
    let record = encode_to_vec(|buffer| super::write_central_directory_file_header(buffer, options))?;
    write_record(writer, &record).await
}

/// Writes a data descriptor. See [`crate::write::write_data_descriptor`].
#[tracing::instrument(skip(writer))]
pub async fn write_data_descriptor(writer: impl AsyncWrite + Unpin, options: &DataDescriptorOptions) -> Result<()> {
    let record = encode_to_vec(|buffer| super::write_data_descriptor(buffer, options))?;
    write_record(writer, &record).await
}

/// Writes the end of central directory block. See [`crate::write::write_end_of_central_directory`].
#[tracing::instrument(skip(writer))]
pub async fn write_end_of_central_directory(
    writer: impl AsyncWrite + Unpin,
    options: &EndOfCentralDirectoryOptions,
) -> Result<()> {
    let record = encode_to_vec(|buffer| super::write_end_of_central_directory(buffer, options))?;
    write_record(writer, &record).await
}

async fn write_record(mut writer: impl AsyncWrite + Unpin, record: &[u8]) -> Result<()> {
    writer.write_all(record).await?;
    Ok(())
}
