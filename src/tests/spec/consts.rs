// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::attribute::unix_external_attributes;
use crate::spec::compression::Compression;
use crate::spec::consts::{DEFAULT_EXTERNAL_ATTRIBUTES, ZIP64_EOCDR_LENGTH, ZIP64_EOCDR_SIZE_FIELD};
use crate::spec::flags;
use crate::spec::version::{as_made_by, as_needed_to_extract};

#[test]
fn version_made_by_is_unix_spec_52() {
    assert_eq!(as_made_by(), 0x0334);
    assert_eq!(as_made_by().to_le_bytes(), [52, 3]);
}

#[test]
fn version_needed_follows_zip64() {
    assert_eq!(as_needed_to_extract(false), 20);
    assert_eq!(as_needed_to_extract(true), 45);
}

#[test]
fn default_external_attributes_are_a_plain_file() {
    assert_eq!(DEFAULT_EXTERNAL_ATTRIBUTES, 0x81A4_0000);

    let mode = DEFAULT_EXTERNAL_ATTRIBUTES >> 16;
    assert_eq!(mode & 0o170000, 0o100000, "not a regular file");
    assert_eq!(mode & 0o777, 0o644);
    assert_eq!(mode & 0o111, 0, "must not be executable");

    assert_eq!(unix_external_attributes(0o100755), 0o100755 << 16);
}

#[test]
fn compression_codes() {
    assert_eq!(u16::from(Compression::Stored), 0);
    assert_eq!(u16::from(Compression::Deflate), 8);
}

#[test]
fn flag_bits() {
    assert_eq!(flags::DATA_DESCRIPTOR, 0x0008);
    assert_eq!(flags::UTF8_FILENAME, 0x0800);
}

#[test]
fn zip64_eocdr_size_field_excludes_itself() {
    assert_eq!(ZIP64_EOCDR_SIZE_FIELD, 44);
    assert_eq!(ZIP64_EOCDR_LENGTH, std::mem::size_of::<u64>() + ZIP64_EOCDR_SIZE_FIELD as usize);
}
