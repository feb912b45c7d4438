// Copyright 2026 quadtree-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use geometry::Vec2;
use num::Float;
use std::fmt::Debug;

/// A tree leaf: a coordinate with its attached payload item
#[derive(Debug, Clone, PartialEq)]
pub struct QuadLeaf<P, T> {
    pub position: Vec2<P>,
    pub item: T,
}

impl<P, T> QuadLeaf<P, T>
    where P: Float + Debug
{
/// New leaf from a position and item
    pub fn new(position: Vec2<P>, item: T) -> QuadLeaf<P, T> {
        QuadLeaf {
            position: position,
            item: item,
        }
    }

/// Consumes self, returning the position and item
    pub fn extract(self) -> (Vec2<P>, T) {
        (self.position, self.item)
    }

    pub fn as_tuple(&self) -> (&Vec2<P>, &T) {
        (&self.position, &self.item)
    }
}
