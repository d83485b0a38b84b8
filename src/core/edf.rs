// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;
use crate::utils::write_u16;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#452
raw! {
    RawExtensibleDataField {
        // Header ID - 2 bytes
        header_id, u16, write_u16,
        // Data Size - 2 bytes
        data_size, u16, write_u16
    }
}
