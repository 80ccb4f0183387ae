// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{BLOCK_LEN, IV_LEN};

/// One AES block
pub type Block = [u8; BLOCK_LEN];
/// Initialisation vector for the chaining modes
pub type Iv = [u8; IV_LEN];
