// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-io-utilities/blob/main/LICENSE)

use std::io::{Error, IoSlice, Write};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::AsyncWrite;
use pin_project::pin_project;

/// A wrapper around a [`Write`] implementation which tracks the current byte offset.
///
/// The offset is what callers feed back into the writers as local header locations and central directory bounds.
#[derive(Debug)]
pub struct OffsetWriter<W> {
    inner: W,
    offset: u64,
}

impl<W: Write> OffsetWriter<W> {
    /// Constructs a new wrapper from an inner [`Write`] writer.
    pub fn new(inner: W) -> Self {
        Self::with_offset(inner, 0)
    }

    /// Constructs a new wrapper which starts counting from the given offset (eg. when appending after a prefix).
    pub fn with_offset(inner: W, offset: u64) -> Self {
        Self { inner, offset }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes this wrapper and returns the inner [`Write`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Returns a mutable reference to the inner writer.
    ///
    /// Bytes written directly to it aren't counted.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: Write> Write for OffsetWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.offset += written as u64;
        Ok(written)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let written = self.inner.write_vectored(bufs)?;
        self.offset += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// A wrapper around an [`AsyncWrite`] implementation which tracks the current byte offset.
#[pin_project(project = OffsetWriterProj)]
#[derive(Debug)]
pub struct AsyncOffsetWriter<W> {
    #[pin]
    inner: W,
    offset: u64,
}

impl<W: AsyncWrite + Unpin> AsyncOffsetWriter<W> {
    /// Constructs a new wrapper from an inner [`AsyncWrite`] writer.
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes this wrapper and returns the inner [`AsyncWrite`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Returns a mutable reference to the inner writer.
    ///
    /// Bytes written directly to it aren't counted.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: AsyncWrite + Unpin> AsyncWrite for AsyncOffsetWriter<W> {
    fn poll_write(self: Pin<&mut Self>, cx: &mut Context, buf: &[u8]) -> Poll<Result<usize, Error>> {
        let this = self.project();
        let poll = this.inner.poll_write(cx, buf);

        if let Poll::Ready(Ok(written)) = &poll {
            *this.offset += *written as u64;
        }

        poll
    }

    fn poll_write_vectored(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        bufs: &[IoSlice<'_>],
    ) -> Poll<Result<usize, Error>> {
        let this = self.project();
        let poll = this.inner.poll_write_vectored(cx, bufs);

        if let Poll::Ready(Ok(written)) = &poll {
            *this.offset += *written as u64;
        }

        poll
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Error>> {
        self.project().inner.poll_flush(cx)
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Result<(), Error>> {
        self.project().inner.poll_close(cx)
    }
}
