// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors raised while building or saving a markup document.
///
/// Nothing is swallowed or logged internally; every failure surfaces
/// immediately to the direct caller.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// Children were pushed into a void element, which has no content slot.
    #[error("void element `{0}` cannot take children")]
    VoidChildren(String),

    /// An I/O failure while writing serialized output, propagated unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
