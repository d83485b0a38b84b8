// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// An attribute host compatibility supported by this crate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Unix,
}

impl From<&AttributeCompatibility> for u16 {
    // Convert a supported attribute host compatibility into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
    fn from(compatibility: &AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Unix => 3,
        }
    }
}

impl From<AttributeCompatibility> for u16 {
    fn from(compatibility: AttributeCompatibility) -> Self {
        (&compatibility).into()
    }
}

/// Returns the external file attributes which carry the given UNIX mode (file type and permission bits).
///
/// ```
/// # use zip_records::spec::attribute::unix_external_attributes;
/// # use zip_records::spec::consts::DEFAULT_EXTERNAL_ATTRIBUTES;
/// assert_eq!(unix_external_attributes(0o100644), DEFAULT_EXTERNAL_ATTRIBUTES);
/// ```
pub fn unix_external_attributes(mode: u16) -> u32 {
    u32::from(mode) << 16
}
