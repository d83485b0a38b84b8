// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::spec::consts::{CDH_LENGTH, CDH_SIGNATURE, DEFAULT_EXTERNAL_ATTRIBUTES, SIGNATURE_LENGTH};
use crate::tests::{new_year_2020, FieldReader};
use crate::write::{write_central_directory_file_header, CentralDirectoryFileHeaderOptions, LocalFileHeaderOptions};

fn a_txt() -> CentralDirectoryFileHeaderOptions<'static> {
    CentralDirectoryFileHeaderOptions {
        filename: b"a.txt",
        compressed_size: 10,
        uncompressed_size: 20,
        crc32: 0x12345678,
        gp_flags: 0,
        storage_mode: 8,
        mtime: new_year_2020(),
        local_file_header_location: 0x1234,
        external_attrs: None,
    }
}

#[test]
fn plain_header_matches_reference_layout() {
    let mut buffer = Vec::<u8>::new();
    write_central_directory_file_header(&mut buffer, &a_txt()).unwrap();

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x50, 0x4b, 0x01, 0x02, // signature
        0x34, 0x03,             // version made by (5.2, UNIX)
        0x14, 0x00,             // version needed to extract (20)
        0x00, 0x00,             // general purpose flags
        0x08, 0x00,             // compression method
        0x00, 0x00,             // last mod file time
        0x21, 0x50,             // last mod file date
        0x78, 0x56, 0x34, 0x12, // crc-32
        0x0a, 0x00, 0x00, 0x00, // compressed size
        0x14, 0x00, 0x00, 0x00, // uncompressed size
        0x05, 0x00,             // file name length
        0x00, 0x00,             // extra field length
        0x00, 0x00,             // file comment length
        0x00, 0x00,             // disk number start
        0x00, 0x00,             // internal file attributes
        0x00, 0x00, 0xa4, 0x81, // external file attributes
        0x34, 0x12, 0x00, 0x00, // relative offset of local header
        b'a', b'.', b't', b'x', b't',
    ];

    assert_eq!(buffer.len(), SIGNATURE_LENGTH + CDH_LENGTH + 5);
    assert_eq!(buffer, expected);
}

#[test]
fn external_attributes_can_be_overridden() {
    let options = CentralDirectoryFileHeaderOptions { external_attrs: Some(0o100755 << 16), ..a_txt() };

    let mut buffer = Vec::<u8>::new();
    write_central_directory_file_header(&mut buffer, &options).unwrap();

    let mut reader = FieldReader::new(&buffer[38..42]);
    assert_eq!(reader.u32(), 0o100755 << 16);
    assert_ne!(0o100755 << 16, DEFAULT_EXTERNAL_ATTRIBUTES);
}

#[test]
fn from_local_copies_shared_fields() {
    let local = LocalFileHeaderOptions {
        filename: b"a.txt",
        compressed_size: 10,
        uncompressed_size: 20,
        crc32: 0x12345678,
        gp_flags: 0,
        storage_mode: 8,
        mtime: new_year_2020(),
    };

    assert_eq!(CentralDirectoryFileHeaderOptions::from_local(&local, 0x1234), a_txt());
}

#[test]
fn fields_decode_in_order() {
    let options = CentralDirectoryFileHeaderOptions {
        filename: b"nested/path/file.dat",
        gp_flags: 0x0008,
        storage_mode: 0,
        ..a_txt()
    };

    let mut buffer = Vec::<u8>::new();
    write_central_directory_file_header(&mut buffer, &options).unwrap();

    let mut reader = FieldReader::new(&buffer);
    assert_eq!(reader.u32(), CDH_SIGNATURE);
    assert_eq!(reader.u16(), 0x0334);
    assert_eq!(reader.u16(), 20);
    assert_eq!(reader.u16(), 0x0008);
    assert_eq!(reader.u16(), 0);
    assert_eq!(reader.u16(), options.mtime.dos_time());
    assert_eq!(reader.u16(), options.mtime.dos_date());
    assert_eq!(reader.u32(), options.crc32);
    assert_eq!(reader.u32(), 10);
    assert_eq!(reader.u32(), 20);
    assert_eq!(reader.u16() as usize, options.filename.len());
    assert_eq!(reader.u16(), 0);
    assert_eq!(reader.u16(), 0);
    assert_eq!(reader.u16(), 0);
    assert_eq!(reader.u16(), 0);
    assert_eq!(reader.u32(), DEFAULT_EXTERNAL_ATTRIBUTES);
    assert_eq!(reader.u32(), 0x1234);
    assert_eq!(reader.position(), 46);
    assert_eq!(reader.bytes(options.filename.len()), options.filename);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn oversized_file_name_is_rejected_before_writing() {
    let filename = vec![b'z'; 70000];
    let options = CentralDirectoryFileHeaderOptions { filename: &filename, ..a_txt() };

    let mut buffer = Vec::<u8>::new();
    let result = write_central_directory_file_header(&mut buffer, &options);

    assert!(matches!(result, Err(ZipError::FileNameTooLarge(70000))));
    assert!(buffer.is_empty());
}
