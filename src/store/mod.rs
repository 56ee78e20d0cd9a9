// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading the vouch book from disk.
//!
//! The dataset is read once at startup; a failure here replaces the whole interface with an
//! error message.

pub mod dataset_file;

pub use dataset_file::{DatasetFile, StoreError, DATA_PATH_ENV, DEFAULT_DATA_PATH};
