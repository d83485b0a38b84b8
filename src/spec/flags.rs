// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! General purpose bit flags which callers commonly pass through the writers.
//!
//! https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#444

/// Bit 3: CRC-32 and sizes are zero in the local header and follow the data in a data descriptor.
pub const DATA_DESCRIPTOR: u16 = 1 << 3;

/// Bit 11: the file name is encoded as UTF-8.
pub const UTF8_FILENAME: u16 = 1 << 11;
