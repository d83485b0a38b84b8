// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::attribute::AttributeCompatibility;

/// The specification version we implement (6.3.x), stored in the low byte of "version made by".
pub const SPEC_VERSION_MADE_BY: u16 = 52;

pub const VERSION_NEEDED_DEFAULT: u16 = 20;
pub const VERSION_NEEDED_ZIP64: u16 = 45;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract(zip64: bool) -> u16 {
    if zip64 {
        VERSION_NEEDED_ZIP64
    } else {
        VERSION_NEEDED_DEFAULT
    }
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by() -> u16 {
    let host: u16 = AttributeCompatibility::Unix.into();
    (host << 8) | SPEC_VERSION_MADE_BY
}
