// Copyright 2026 quadtree-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A 2d quadtree spatial index.
//!
//! `QuadMap` stores points, each a coordinate in the plane with an attached
//! payload item, and answers axis-aligned rectangle range queries. Points can
//! be inserted and removed; regions subdivide into quadrants on demand, capped
//! by a per-node point capacity and a maximum depth. All traversal is iterative,
//! so deep trees never risk the call stack.

extern crate num;
extern crate thiserror;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod error;
pub mod geometry;
pub mod tree;

pub use error::QuadError;
pub use geometry::{Bounds, Quadrant, Vec2};
pub use tree::quad::{Iter, QuadLeaf, QuadMap, QuadNode};
pub use tree::quad::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_POINTS_PER_NODE};

/// A quadtree over single precision coordinates
pub type QuadTree<T> = QuadMap<f32, T>;
