// Copyright 2026 quadtree-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Error types reported by the quadtree's mutating operations.

use thiserror::Error;

/// Errors that can occur while inserting into or removing from a quadtree.
///
/// Both variants are reported before any mutation has taken place, so a
/// failed call leaves the tree exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuadError {
    #[error("the point is outside of the area that is covered by this quadtree")]
    OutOfRange,

    #[error("no entry with a matching payload was found at the given position")]
    NotFound,
}
