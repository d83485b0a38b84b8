// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Byte-exact writers for each on-wire record.
//!
//! Every record is split into a fixed-width raw struct (generated by `raw!`) and a `write` function which emits
//! the signature, the raw fields, and any variable-length tail. None of these writers decide between ZIP64 and
//! non-ZIP64 layouts; that choice is made by [`crate::write`] when it fills in the structs.

pub mod cdr;
pub mod dd;
pub mod edf;
pub mod eocdr;
pub mod lfh;
pub mod zip64;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty, $write:expr),* }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        impl $name {
            /// Writes the raw underlying fields, in declaration order, to the given writer.
            pub fn raw_write(&self, mut writer: impl std::io::Write) -> $crate::error::Result<()> {
                $($write(&mut writer, self.$field)?;)*
                Ok(())
            }
        }
    }
}

pub(crate) use raw;
