// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// Data descriptor constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#439
pub const DATA_DESCRIPTOR_SIGNATURE: u32 = 0x8074b50;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

// Zip64 end of central directory record & locator constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4314
pub const ZIP64_EOCDR_SIGNATURE: u32 = 0x6064b50;
pub const ZIP64_EOCDR_LENGTH: usize = 52;
/// The value of the record's own size field, which excludes the signature and the size field itself.
pub const ZIP64_EOCDR_SIZE_FIELD: u64 = 44;
pub const ZIP64_EOCDL_SIGNATURE: u32 = 0x7064b50;
pub const ZIP64_EOCDL_LENGTH: usize = 16;

// Zip64 extended information extra field constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#453
pub const ZIP64_EXTRA_FIELD_HEADER_ID: u16 = 0x0001;
pub const ZIP64_LOCAL_EXTRA_FIELD_DATA_SIZE: u16 = 16;
pub const ZIP64_CENTRAL_EXTRA_FIELD_DATA_SIZE: u16 = 28;

/// The largest value a 32-bit size or offset field can hold before Zip64 is needed.
pub const NON_ZIP64_MAX_SIZE: u32 = 0xFFFFFFFF;
/// The largest entry count the end of central directory record can hold before Zip64 is needed.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = 0xFFFF;

/// A regular file (S_IFREG) with rw-r--r-- permissions, shifted into the high half of the external attributes.
pub const DEFAULT_EXTERNAL_ATTRIBUTES: u32 = 0o100644 << 16;

/// The comment written into every end of central directory record.
pub const ARCHIVE_COMMENT: &[u8] = b"Written using zip_records";
