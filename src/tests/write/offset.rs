// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::tests::new_year_2020;
use crate::write::{write_local_file_header, AsyncOffsetWriter, LocalFileHeaderOptions, OffsetWriter};

#[tokio::test]
async fn basic() {
    use futures_lite::io::AsyncWriteExt;
    use futures_lite::io::Cursor;

    let mut writer = AsyncOffsetWriter::new(Cursor::new(Vec::<u8>::new()));
    assert_eq!(writer.offset(), 0);

    writer.write_all(b"Foo. Bar. Foo. Bar.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 19);

    writer.write_all(b"Foo. Foo.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 28);

    writer.write_all(b"Bar. Bar.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 37);

    assert_eq!(writer.into_inner().into_inner().len(), 37);
}

#[test]
fn sync_basic() {
    use std::io::Write;

    let mut writer = OffsetWriter::new(Vec::<u8>::new());
    assert_eq!(writer.offset(), 0);

    writer.write_all(b"Foo. Bar. Foo. Bar.").expect("failed to write data");
    assert_eq!(writer.offset(), 19);

    let options = LocalFileHeaderOptions { filename: b"a.txt", mtime: new_year_2020(), ..Default::default() };
    write_local_file_header(&mut writer, &options).unwrap();
    assert_eq!(writer.offset(), 19 + 35);

    assert_eq!(writer.into_inner().len(), 19 + 35);
}

#[test]
fn with_offset_starts_counting_from_prefix() {
    use std::io::Write;

    let mut writer = OffsetWriter::with_offset(Vec::<u8>::new(), 0x1_0000_0000);
    writer.write_all(&[0; 10]).unwrap();

    assert_eq!(writer.offset(), 0x1_0000_000A);
    assert_eq!(writer.inner_mut().len(), 10);
}
