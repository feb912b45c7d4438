// Copyright 2026 quadtree-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Coordinates, quadrants, and rectangular regions of the 2d plane

use num::{Float, FromPrimitive};
use std::fmt::Debug;

/// An x/y coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<P> {
    pub x: P,
    pub y: P,
}

impl<P> Vec2<P>
    where P: Float + Debug
{
/// New coordinate from its two components
    pub fn new(x: P, y: P) -> Vec2<P> {
        assert!(x.is_finite(), "{:?} should be finite", x);
        assert!(y.is_finite(), "{:?} should be finite", y);
        Vec2 { x: x, y: y }
    }

/// Whether the coordinate lies within the closed rectangle spanned by
/// `top_left` and `bottom_right`, all four boundaries included
    pub fn within(&self, top_left: Vec2<P>, bottom_right: Vec2<P>) -> bool {
        self.x >= top_left.x && self.x <= bottom_right.x && self.y >= top_left.y &&
        self.y <= bottom_right.y
    }
}

/// One of the four subdivisions of a region, split at its center point.
/// Doubles as the child slot address within a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All four quadrants, in child slot order
    pub const ALL: [Quadrant; 4] = [Quadrant::TopLeft,
                                    Quadrant::TopRight,
                                    Quadrant::BottomLeft,
                                    Quadrant::BottomRight];
}

/// A rectangular region addressed by its top-left and bottom-right corners.
///
/// The center is derived once at construction and defines the four quadrant
/// boundaries. Callers are responsible for passing corners that are ordered
/// component-wise; no further validation happens here.
#[derive(Debug, Clone, Copy)]
pub struct Bounds<P> {
    pub top_left: Vec2<P>,
    pub bottom_right: Vec2<P>,
    pub center: Vec2<P>,
}

impl<P> Bounds<P>
    where P: Float + FromPrimitive + Debug
{
/// New region from two opposite corners; the center is their midpoint
    pub fn new(top_left: Vec2<P>, bottom_right: Vec2<P>) -> Bounds<P> {
        let two = FromPrimitive::from_usize(2).unwrap();
        let center = Vec2::new((top_left.x + bottom_right.x) / two,
                               (top_left.y + bottom_right.y) / two);
        Bounds {
            top_left: top_left,
            bottom_right: bottom_right,
            center: center,
        }
    }

/// The quadrant the given coordinate belongs to.
///
/// The quadrant boundaries are half-open: a coordinate lying exactly on a
/// center line is routed to the right/bottom side.
    pub fn quadrant_of(&self, pos: Vec2<P>) -> Quadrant {
        if pos.x < self.center.x && pos.y < self.center.y {
            Quadrant::TopLeft
        } else if pos.x < self.center.x {
            Quadrant::BottomLeft
        } else if pos.y < self.center.y {
            Quadrant::TopRight
        } else {
            Quadrant::BottomRight
        }
    }

/// The sub-region covered by one quadrant of this region
    pub fn quadrant_bounds(&self, quadrant: Quadrant) -> Bounds<P> {
        match quadrant {
            Quadrant::TopLeft => Bounds::new(self.top_left, self.center),
            Quadrant::TopRight => {
                Bounds::new(Vec2::new(self.center.x, self.top_left.y),
                            Vec2::new(self.bottom_right.x, self.center.y))
            }
            Quadrant::BottomLeft => {
                Bounds::new(Vec2::new(self.top_left.x, self.center.y),
                            Vec2::new(self.center.x, self.bottom_right.y))
            }
            Quadrant::BottomRight => Bounds::new(self.center, self.bottom_right),
        }
    }

/// Whether this region overlaps the rectangle spanned by `top_left` and
/// `bottom_right`. A shared edge or corner counts as overlap.
    pub fn overlaps(&self, top_left: Vec2<P>, bottom_right: Vec2<P>) -> bool {
        if bottom_right.y < self.top_left.y {
            return false;
        }
        if bottom_right.x < self.top_left.x {
            return false;
        }
        if top_left.y > self.bottom_right.y {
            return false;
        }
        if top_left.x > self.bottom_right.x {
            return false;
        }
        true
    }

/// Whether the coordinate lies within this region, boundaries included
    pub fn contains(&self, pos: Vec2<P>) -> bool {
        pos.within(self.top_left, self.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Bounds<f32> {
        Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn center_is_the_corner_midpoint() {
        let bounds = Bounds::new(Vec2::new(-180.0f64, -90.0), Vec2::new(180.0, 90.0));
        assert_relative_eq!(0.0, bounds.center.x);
        assert_relative_eq!(0.0, bounds.center.y);

        let offset = Bounds::new(Vec2::new(1.0f64, 2.0), Vec2::new(2.0, 5.0));
        assert_relative_eq!(1.5, offset.center.x);
        assert_relative_eq!(3.5, offset.center.y);
    }

    #[test]
    fn quadrant_rule_is_half_open() {
        let bounds = unit();
        assert_eq!(Quadrant::TopLeft, bounds.quadrant_of(Vec2::new(0.25, 0.25)));
        assert_eq!(Quadrant::TopRight, bounds.quadrant_of(Vec2::new(0.75, 0.25)));
        assert_eq!(Quadrant::BottomLeft, bounds.quadrant_of(Vec2::new(0.25, 0.75)));
        assert_eq!(Quadrant::BottomRight, bounds.quadrant_of(Vec2::new(0.75, 0.75)));

        // coordinates exactly on a center line go right/bottom
        assert_eq!(Quadrant::BottomRight, bounds.quadrant_of(Vec2::new(0.5, 0.5)));
        assert_eq!(Quadrant::TopRight, bounds.quadrant_of(Vec2::new(0.5, 0.25)));
        assert_eq!(Quadrant::BottomLeft, bounds.quadrant_of(Vec2::new(0.25, 0.5)));
    }

    #[test]
    fn quadrant_rule_is_deterministic() {
        let bounds = unit();
        for &(x, y) in [(0.1, 0.1), (0.5, 0.5), (0.5, 0.1), (0.1, 0.5), (0.9, 0.9)].iter() {
            let pos = Vec2::new(x, y);
            let first = bounds.quadrant_of(pos);
            for _ in 0..100 {
                assert_eq!(first, bounds.quadrant_of(pos));
            }
        }
    }

    #[test]
    fn quadrants_partition_the_region() {
        let bounds = unit();
        let top_left = bounds.quadrant_bounds(Quadrant::TopLeft);
        assert_relative_eq!(0.0, top_left.top_left.x);
        assert_relative_eq!(0.0, top_left.top_left.y);
        assert_relative_eq!(0.5, top_left.bottom_right.x);
        assert_relative_eq!(0.5, top_left.bottom_right.y);

        let top_right = bounds.quadrant_bounds(Quadrant::TopRight);
        assert_relative_eq!(0.5, top_right.top_left.x);
        assert_relative_eq!(0.0, top_right.top_left.y);
        assert_relative_eq!(1.0, top_right.bottom_right.x);
        assert_relative_eq!(0.5, top_right.bottom_right.y);

        let bottom_left = bounds.quadrant_bounds(Quadrant::BottomLeft);
        assert_relative_eq!(0.0, bottom_left.top_left.x);
        assert_relative_eq!(0.5, bottom_left.top_left.y);
        assert_relative_eq!(0.5, bottom_left.bottom_right.x);
        assert_relative_eq!(1.0, bottom_left.bottom_right.y);

        let bottom_right = bounds.quadrant_bounds(Quadrant::BottomRight);
        assert_relative_eq!(0.5, bottom_right.top_left.x);
        assert_relative_eq!(0.5, bottom_right.top_left.y);
        assert_relative_eq!(1.0, bottom_right.bottom_right.x);
        assert_relative_eq!(1.0, bottom_right.bottom_right.y);
    }

    #[test]
    fn routed_quadrant_covers_the_coordinate() {
        let bounds = unit();
        for &(x, y) in [(0.1, 0.1), (0.9, 0.1), (0.1, 0.9), (0.9, 0.9), (0.5, 0.5), (0.5, 0.2)]
            .iter() {
            let pos = Vec2::new(x, y);
            let child = bounds.quadrant_bounds(bounds.quadrant_of(pos));
            assert!(child.contains(pos), "{:?} should cover {:?}", child, pos);
        }
    }

    #[test]
    fn overlap_is_boundary_inclusive() {
        let bounds = unit();
        // fully inside, fully covering, partial
        assert!(bounds.overlaps(Vec2::new(0.25, 0.25), Vec2::new(0.75, 0.75)));
        assert!(bounds.overlaps(Vec2::new(-1.0, -1.0), Vec2::new(2.0, 2.0)));
        assert!(bounds.overlaps(Vec2::new(0.5, 0.5), Vec2::new(2.0, 2.0)));
        // touching an edge or corner still overlaps
        assert!(bounds.overlaps(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)));
        assert!(bounds.overlaps(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)));
        // separated on either axis
        assert!(!bounds.overlaps(Vec2::new(1.1, 0.0), Vec2::new(2.0, 1.0)));
        assert!(!bounds.overlaps(Vec2::new(0.0, 1.1), Vec2::new(1.0, 2.0)));
        assert!(!bounds.overlaps(Vec2::new(-2.0, -2.0), Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn within_is_closed_on_all_four_bounds() {
        let top_left = Vec2::new(0.0f32, 0.0);
        let bottom_right = Vec2::new(1.0f32, 1.0);
        assert!(Vec2::new(0.5, 0.5).within(top_left, bottom_right));
        assert!(Vec2::new(0.0, 0.0).within(top_left, bottom_right));
        assert!(Vec2::new(1.0, 1.0).within(top_left, bottom_right));
        assert!(Vec2::new(0.0, 1.0).within(top_left, bottom_right));
        assert!(!Vec2::new(1.0001, 0.5).within(top_left, bottom_right));
        assert!(!Vec2::new(0.5, -0.0001).within(top_left, bottom_right));
    }

    #[test]
    #[should_panic(expected = "should be finite")]
    fn non_finite_coordinates_are_rejected() {
        Vec2::new(f32::NAN, 0.0);
    }
}
