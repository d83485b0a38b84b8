// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # zip_records
//!
//! A low-level encoder for the metadata records of ZIP archives, including the ZIP64 extension.
//!
//! ## Features
//! - Byte-exact local file headers, central directory file headers, data descriptors, and end of central directory
//!   records (plus the ZIP64 end of central directory record & locator).
//! - Per-record ZIP64 selection: 64-bit values are moved into ZIP64 structures only when a record needs them.
//! - Synchronous writers over [`std::io::Write`], with asynchronous mirrors over `futures-lite`'s `AsyncWrite`.
//! - Optional `chrono` conversions for modification timestamps.
//!
//! This crate doesn't compress data, compute checksums, or track archive-wide state. Callers supply CRC-32 values,
//! sizes, and offsets, and call the writers in archive order.
//!
//! Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.

pub mod date;
pub mod error;
pub mod core;
pub mod spec;
pub(crate) mod utils;
pub mod write;


pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::spec::compression::Compression;
pub use crate::write::{
    write_central_directory_file_header, write_data_descriptor, write_end_of_central_directory,
    write_local_file_header, write_zip64_extra_for_central_directory_file_header,
    write_zip64_extra_for_local_file_header, CentralDirectoryFileHeaderOptions, DataDescriptorOptions,
    EndOfCentralDirectoryOptions, LocalFileHeaderOptions,
};
