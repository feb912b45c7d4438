// Copyright 2026 quadtree-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use geometry::{Bounds, Quadrant};
use num::{Float, FromPrimitive};
use std::fmt::Debug;
use std::mem;
use tree::quad::QuadLeaf;

/// A node of the quadtree, covering one rectangular region of the plane.
///
/// A leaf node holds its points directly. Once split, a node owns exactly
/// four children, one per quadrant of its region, and holds no points of its
/// own. Every point stored under a node lies within the node's bounds.
#[derive(Debug)]
pub struct QuadNode<P, T> {
    pub bounds: Bounds<P>,
    pub children: [Option<Box<QuadNode<P, T>>>; 4],
    pub points: Vec<QuadLeaf<P, T>>,
}

impl<P, T> QuadNode<P, T>
    where P: Float + FromPrimitive + Debug
{
/// Create an empty leaf node covering the given region
    pub fn new(bounds: Bounds<P>) -> QuadNode<P, T> {
        QuadNode {
            bounds: bounds,
            children: [None, None, None, None],
            points: Vec::new(),
        }
    }

/// Borrow the child covering the given quadrant
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode<P, T>> {
        self.children[quadrant as usize].as_deref()
    }

/// Mutably borrow the child covering the given quadrant
    pub fn child_mut(&mut self, quadrant: Quadrant) -> Option<&mut QuadNode<P, T>> {
        self.children[quadrant as usize].as_deref_mut()
    }

/// Mutably borrow the child slot itself, for attaching or detaching a child
    pub fn child_slot(&mut self, quadrant: Quadrant) -> &mut Option<Box<QuadNode<P, T>>> {
        &mut self.children[quadrant as usize]
    }

/// Does the node own any children?
    pub fn has_children(&self) -> bool {
        self.children.iter().any(|child| child.is_some())
    }

/// Split the node: create all four children at once and hand every stored
/// point to the child covering its quadrant, leaving the node's own list
/// empty.
    pub fn subdivide(&mut self) {
        for &quadrant in Quadrant::ALL.iter() {
            let bounds = self.bounds.quadrant_bounds(quadrant);
            self.children[quadrant as usize] = Some(Box::new(QuadNode::new(bounds)));
        }
        let points = mem::replace(&mut self.points, Vec::new());
        for leaf in points {
            let quadrant = self.bounds.quadrant_of(leaf.position);
            self.children[quadrant as usize].as_mut().unwrap().points.push(leaf);
        }
    }
}
