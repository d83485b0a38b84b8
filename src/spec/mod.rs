// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod attribute;
pub mod compression;
pub mod consts;
pub mod flags;
pub mod version;
