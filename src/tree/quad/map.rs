// Copyright 2026 quadtree-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use error::QuadError;
use geometry::{Bounds, Quadrant, Vec2};
use num::{Float, FromPrimitive, One, Zero};
use std::fmt::Debug;
use std::slice::Iter as SliceIter;
use tree::quad::{QuadLeaf, QuadNode};

/// Default cap on the points held by a single node before a split is considered
pub const DEFAULT_MAX_POINTS_PER_NODE: usize = 5;
/// Default cap on the subdivision depth, the root sitting at depth 1
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// A quadtree map from 2d coordinates to payload items.
///
/// Points are kept in leaf nodes of a lazily subdivided region tree. A node
/// splits into its four quadrants once it holds `max_points_per_node` points,
/// but never beyond `max_depth` levels, so dense clusters stay bounded and
/// sparse regions stay coarse. The covered rectangle is fixed for the life of
/// the map.
#[derive(Debug)]
pub struct QuadMap<P, T> {
    root: QuadNode<P, T>,
    max_points_per_node: usize,
    max_depth: usize,
    len: usize,
}

impl<P, T> QuadMap<P, T>
    where P: Float + FromPrimitive + Debug
{
/// Create a quadtree covering the rectangle spanned by the given corners,
/// with the default tuning constants
    pub fn new(top_left: Vec2<P>, bottom_right: Vec2<P>) -> QuadMap<P, T> {
        QuadMap::new_with_options(top_left,
                                  bottom_right,
                                  DEFAULT_MAX_POINTS_PER_NODE,
                                  DEFAULT_MAX_DEPTH)
    }

/// Create a quadtree with the tuning constants as provided
    pub fn new_with_options(top_left: Vec2<P>,
                            bottom_right: Vec2<P>,
                            max_points_per_node: usize,
                            max_depth: usize)
                            -> QuadMap<P, T> {
        assert!(max_points_per_node > 0,
                "max_points_per_node({:?}) must be at least 1",
                max_points_per_node);
        assert!(max_depth > 0, "max_depth({:?}) must be at least 1", max_depth);
        QuadMap {
            root: QuadNode::new(Bounds::new(top_left, bottom_right)),
            max_points_per_node: max_points_per_node,
            max_depth: max_depth,
            len: 0,
        }
    }

/// Insert a point at the given position.
///
/// Fails with `QuadError::OutOfRange`, touching nothing, when the position
/// falls outside the covered rectangle. The rectangle's own boundary is
/// inside.
    pub fn insert(&mut self, pos: Vec2<P>, item: T) -> Result<(), QuadError> {
        if !self.root.bounds.contains(pos) {
            return Err(QuadError::OutOfRange);
        }
        let max_points_per_node = self.max_points_per_node;
        let max_depth = self.max_depth;

        // walk down to the first node with no child covering the position
        let mut node = &mut self.root;
        let mut depth = 1;
        loop {
            let quadrant = node.bounds.quadrant_of(pos);
            if node.children[quadrant as usize].is_none() {
                break;
            }
            node = node.children[quadrant as usize].as_deref_mut().unwrap();
            depth += 1;
        }

        // split while the landing node is at capacity and the depth cap
        // allows, following the position's quadrant into the fresh children.
        // A node that kept children through a pruned sibling slot only
        // collects points; splitting it would orphan the surviving subtrees.
        while !node.has_children() && node.points.len() >= max_points_per_node &&
              depth < max_depth {
            node.subdivide();
            let quadrant = node.bounds.quadrant_of(pos);
            node = node.children[quadrant as usize].as_deref_mut().unwrap();
            depth += 1;
        }

        node.points.push(QuadLeaf::new(pos, item));
        self.len += 1;
        Ok(())
    }

/// Remove the entry whose payload equals `item`, looked up in the leaf at
/// the end of the quadrant path of `pos`. Returns the removed entry.
///
/// Fails with `QuadError::NotFound`, touching nothing, when no such entry
/// exists there. The order of the points remaining in the affected node is
/// not preserved. Nodes left empty and childless are detached on the way
/// back up, stopping at the first survivor.
    pub fn remove(&mut self, pos: Vec2<P>, item: &T) -> Result<(Vec2<P>, T), QuadError>
        where T: PartialEq
    {
        // walk down as insert does, recording the quadrant taken at each step
        let mut path = Vec::new();
        let mut node = &mut self.root;
        loop {
            let quadrant = node.bounds.quadrant_of(pos);
            if node.children[quadrant as usize].is_none() {
                break;
            }
            node = node.children[quadrant as usize].as_deref_mut().unwrap();
            path.push(quadrant);
        }

        let index = match node.points.iter().position(|leaf| leaf.item == *item) {
            Some(index) => index,
            None => return Err(QuadError::NotFound),
        };
        let removed = node.points.swap_remove(index);
        self.len -= 1;

        // detach emptied nodes bottom-up along the recorded path; the parent
        // is the next node up the path, or the root once it is exhausted
        while let Some(quadrant) = path.pop() {
            let parent = node_at_mut(&mut self.root, &path);
            let prune = {
                let child = parent.child(quadrant)
                    .expect("node on the descent path must still be attached");
                child.points.is_empty() && !child.has_children()
            };
            if !prune {
                break;
            }
            *parent.child_slot(quadrant) = None;
        }

        Ok(removed.extract())
    }

/// All entries lying within the closed query rectangle spanned by
/// `top_left` and `bottom_right`, in unspecified order.
///
/// Returns a freshly collected sequence; the tree itself is not touched.
    pub fn query(&self, top_left: Vec2<P>, bottom_right: Vec2<P>) -> Vec<(&Vec2<P>, &T)> {
        let mut result = Vec::new();
        // nodes whose subtree may still hold matching points
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            for slot in node.children.iter() {
                if let Some(ref child) = *slot {
                    if child.bounds.overlaps(top_left, bottom_right) {
                        stack.push(child);
                    }
                }
            }
            for leaf in &node.points {
                if leaf.position.within(top_left, bottom_right) {
                    result.push(leaf.as_tuple());
                }
            }
        }
        result
    }

/// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

/// Number of entries in the map
    pub fn len(&self) -> usize {
        self.len
    }

/// Drop every entry and child region, keeping the covered rectangle
    pub fn clear(&mut self) {
        self.root = QuadNode::new(self.root.bounds);
        self.len = 0;
    }

/// The rectangle covered by the map
    pub fn bounds(&self) -> &Bounds<P> {
        &self.root.bounds
    }

/// Iter for the map
    pub fn iter(&self) -> Iter<P, T> {
        Iter {
            node_stack: vec![&self.root],
            leaf_iter: None,
        }
    }
}

impl<P, T> Default for QuadMap<P, T>
    where P: Float + FromPrimitive + Debug
{
/// A quadtree over the unit square, [0, 0] to [1, 1]
    fn default() -> QuadMap<P, T> {
        QuadMap::new(Vec2::new(P::zero(), P::zero()), Vec2::new(P::one(), P::one()))
    }
}

/// Walk the recorded quadrant path down from `node`
fn node_at_mut<'tree, P, T>(mut node: &'tree mut QuadNode<P, T>,
                            path: &[Quadrant])
                            -> &'tree mut QuadNode<P, T>
    where P: Float + FromPrimitive + Debug
{
    for &quadrant in path {
        node = node.child_mut(quadrant)
            .expect("node on the descent path must still be attached");
    }
    node
}

type LeafIter<'tree, P, T> = SliceIter<'tree, QuadLeaf<P, T>>;

/// Iterate through every entry in the map, in unspecified order
pub struct Iter<'tree, P: 'tree, T: 'tree> {
    node_stack: Vec<&'tree QuadNode<P, T>>,
    leaf_iter: Option<LeafIter<'tree, P, T>>,
}

impl<'tree, P, T> Iterator for Iter<'tree, P, T>
    where P: Float + FromPrimitive + Debug + 'tree,
          T: 'tree
{
    type Item = (&'tree Vec2<P>, &'tree T);

    fn next(&mut self) -> Option<(&'tree Vec2<P>, &'tree T)> {
        loop {
            if let Some(ref mut leaf_iter) = self.leaf_iter {
                if let Some(leaf) = leaf_iter.next() {
                    return Some(leaf.as_tuple());
                }
            }
            match self.node_stack.pop() {
                Some(node) => {
                    for slot in node.children.iter() {
                        if let Some(ref child) = *slot {
                            self.node_stack.push(child);
                        }
                    }
                    self.leaf_iter = Some(node.points.iter());
                }
                None => return None,
            }
        }
    }
}
