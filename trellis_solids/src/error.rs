// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors raised while constructing geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolidsError {
    /// An unsupported orientation or element-kind tag was supplied. Fatal
    /// to the constructing call; not recoverable internally.
    #[error("invalid tag: `{0}`")]
    InvalidTag(String),
}
