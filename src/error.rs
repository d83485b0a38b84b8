// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("file name too large: {0} bytes exceeds the 65535 byte limit")]
    FileNameTooLarge(usize),
    #[error("extra field too large to be described by a u16 length")]
    ExtraFieldTooLarge,
    #[error("date and time out of range for the MS-DOS representation: {0}")]
    DateTimeOutOfRange(&'static str),

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
}
