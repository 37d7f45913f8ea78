/*

    Axis aligned cuboid given by its center and
    height (x), width (y), length (z).

    Supports:
        - Fit test against boundary planes
        - Constrained and unconstrained translation
        - Strict AABB intersection (touching faces do not collide)
        - 90 degree rotation about the x (height) axis, optionally
          reporting where to move before the rotation would fit

    Bounds (mins, maxes) are recomputed after every mutation,
    fields are private so they can never go stale.

    @author: bartu
    @date: 9 Nov, 2025
*/

use crate::prelude::*;
use crate::interval::Interval;

/// Outcome of a boundary-aware rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    Rotated,
    /// Minimum center to move_to( ) before rotating again
    NeedsRelocation(Vector3),
}

impl Rotation {
    pub fn is_rotated(&self) -> bool {
        matches!(self, Rotation::Rotated)
    }

    pub fn relocation(&self) -> Option<Vector3> {
        match self {
            Rotation::Rotated => None,
            Rotation::NeedsRelocation(center) => Some(*center),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[derive(SmartDefault)]
pub struct Cuboid {
    center: Vector3,

    #[default = 2.0]
    height: Float,
    #[default = 2.0]
    width: Float,
    #[default = 2.0]
    length: Float,

    #[default(Vector3::splat(-1.0))]
    mins: Vector3,
    #[default(Vector3::ONE)]
    maxes: Vector3,
}

impl Cuboid {

    pub const DEFAULT_SIZE: Float = 2.0;
    /// Planes through the origin, the box must not cross them towards negative
    pub const DEFAULT_BOUNDS: Vector3 = Vector3::ZERO;

    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self::with_size(x, y, z, Self::DEFAULT_SIZE, Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }

    pub fn with_size(x: Float, y: Float, z: Float, height: Float, width: Float, length: Float) -> Self {
        Self::from_center_size(Vector3::new(x, y, z), [height, width, length])
    }

    /// size is given as [height, width, length].
    /// Non-positive sizes are accepted and produce degenerate or inverted bounds.
    pub fn from_center_size(center: Vector3, size: [Float; 3]) -> Self {
        let [height, width, length] = size;
        let mut cuboid = Self {
            center,
            height,
            width,
            length,
            mins: center,
            maxes: center,
        };
        cuboid.set_bounds();

        if cuboid.is_degenerate() {
            warn!("Cuboid at {} has non-positive size h={} w={} l={}", center, height, width, length);
        }
        cuboid
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn x(&self) -> Float { self.center.x }
    pub fn y(&self) -> Float { self.center.y }
    pub fn z(&self) -> Float { self.center.z }

    pub fn height(&self) -> Float { self.height }
    pub fn width(&self) -> Float { self.width }
    pub fn length(&self) -> Float { self.length }

    pub fn mins(&self) -> Vector3 {
        self.mins
    }

    pub fn maxes(&self) -> Vector3 {
        self.maxes
    }

    pub fn extent(&self, axis: Axis) -> Float {
        match axis {
            Axis::X => self.height,
            Axis::Y => self.width,
            Axis::Z => self.length,
        }
    }

    pub fn span(&self, axis: Axis) -> Interval {
        Interval::new(axis.of(&self.mins), axis.of(&self.maxes))
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.height > 0.0 && self.width > 0.0 && self.length > 0.0)
    }

    /// Distance from center to the y/z corner. Not a 3D diagonal,
    /// it is the margin rotate_x_within( ) keeps from the boundary.
    pub fn diag(&self) -> Float {
        let dy = self.maxes.y - self.center.y;
        let dz = self.maxes.z - self.center.z;
        (dy * dy + dz * dz).sqrt()
    }

    /// All 8 corners, x outer, y middle, z inner, max before min on each axis.
    pub fn vertices(&self) -> [Vector3; 8] {
        let mut vertices = [Vector3::ZERO; 8];
        let mut i = 0;
        for x in [self.maxes.x, self.mins.x] {
            for y in [self.maxes.y, self.mins.y] {
                for z in [self.maxes.z, self.mins.z] {
                    vertices[i] = Vector3::new(x, y, z);
                    i += 1;
                }
            }
        }
        vertices
    }

    /// True if moving the center to candidate keeps every min at or beyond bounds.
    pub fn will_fit(&self, candidate: Vector3, bounds: Vector3) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let delta = axis.of(&self.center) - axis.of(&candidate);
            axis.of(&self.mins) - delta >= axis.of(&bounds)
        })
    }

    /// Fit test at the current center
    pub fn fits_within(&self, bounds: Vector3) -> bool {
        self.will_fit(self.center, bounds)
    }

    pub fn move_to(&mut self, x: Float, y: Float, z: Float) -> bool {
        self.move_to_within(x, y, z, Self::DEFAULT_BOUNDS)
    }

    /// Leaves the cuboid untouched and returns false if the move would cross bounds
    pub fn move_to_within(&mut self, x: Float, y: Float, z: Float, bounds: Vector3) -> bool {
        let candidate = Vector3::new(x, y, z);
        if self.will_fit(candidate, bounds) {
            self.move_to_unchecked(x, y, z);
            true
        } else {
            debug!("Rejected move from {} to {}, would cross boundary {}", self.center, candidate, bounds);
            false
        }
    }

    pub fn move_to_unchecked(&mut self, x: Float, y: Float, z: Float) -> &mut Self {
        self.center = Vector3::new(x, y, z);
        self.set_bounds();

        self
    }

    pub fn intersects(&self, other: &Cuboid) -> bool {
        Axis::ALL.iter().all(|&axis| self.span(axis).overlaps(&other.span(axis)))
    }

    pub fn rotate_x(&mut self) -> Rotation {
        self.rotate_x_within(Self::DEFAULT_BOUNDS)
    }

    /// Rotate 90 degrees about x if the rotated footprint clears bounds
    /// where it stands. Otherwise nothing changes and the minimum center
    /// to move to first is returned.
    pub fn rotate_x_within(&mut self, bounds: Vector3) -> Rotation {
        let old_center = self.center;
        let diag = self.diag();

        let mut new_center = old_center;
        if bounds.x > self.mins.x {
            // x extent does not change with rotation, only pull it off the plane
            new_center.x = bounds.x + self.height / 2.0;
        }
        new_center.y = old_center.y.max(bounds.y + diag);
        new_center.z = old_center.z.max(bounds.z + diag);

        if new_center == old_center {
            self.rotate_x_unchecked();
            Rotation::Rotated
        } else {
            debug!("Cannot rotate at {} within {}, needs center {}", old_center, bounds, new_center);
            Rotation::NeedsRelocation(new_center)
        }
    }

    /// Swap width and length, center and height stay
    pub fn rotate_x_unchecked(&mut self) -> &mut Self {
        std::mem::swap(&mut self.width, &mut self.length);
        self.set_bounds();

        self
    }

    fn set_bounds(&mut self) {
        let xint = Interval::centered(self.center.x, self.height);
        let yint = Interval::centered(self.center.y, self.width);
        let zint = Interval::centered(self.center.z, self.length);

        self.mins = Vector3::new(xint.min, yint.min, zint.min);
        self.maxes = Vector3::new(xint.max, yint.max, zint.max);
    }
}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope

    fn assert_bounds_consistent(c: &Cuboid) {
        for axis in Axis::ALL {
            let span = c.span(axis);
            assert!(approx_zero(span.size() - c.extent(axis)), "{:?} extent mismatch on {:?}", c, axis);
            assert!(approx_zero(span.center() - axis.of(&c.center())), "{:?} center mismatch on {:?}", c, axis);
        }
    }

    #[test]
    fn test_default_matches_new_at_origin() {
        let c = Cuboid::default();
        assert_eq!(c, Cuboid::new(0., 0., 0.));
        assert_bounds_consistent(&c);
    }

    #[test]
    fn test_default_size() {
        let c = Cuboid::new(4., 4., 4.);
        assert_eq!(c.center(), Vector3::new(4., 4., 4.));
        assert_eq!(c.maxes(), Vector3::splat(5.));
        assert_eq!(c.mins(), Vector3::splat(3.));
        assert_eq!((c.x(), c.y(), c.z()), (4., 4., 4.));
    }

    #[test]
    fn test_degenerate_sizes_are_accepted() {
        let flat = Cuboid::with_size(1., 1., 1., 0., 2., 2.);
        assert!(flat.is_degenerate());
        assert_eq!(flat.span(Axis::X).size(), 0.);

        let inverted = Cuboid::with_size(0., 0., 0., -2., 2., 2.);
        assert!(inverted.is_degenerate());
        assert!(inverted.mins().x > inverted.maxes().x);
        assert!(!Cuboid::new(0., 0., 0.).is_degenerate());
    }

    #[test]
    fn test_diag_uses_y_and_z_only() {
        let c = Cuboid::with_size(3., 3., 4., 100., 6., 8.);
        assert_eq!(c.diag(), 5.);
    }

    #[test]
    fn test_vertices_order() {
        let c = Cuboid::with_size(3., 3., 3., 6., 4., 5.);
        let v = c.vertices();
        assert_eq!(v[0], Vector3::new(6., 5., 5.5));
        assert_eq!(v[1], Vector3::new(6., 5., 0.5));
        assert_eq!(v[2], Vector3::new(6., 1., 5.5));
        assert_eq!(v[4], Vector3::new(0., 5., 5.5));
        assert_eq!(v[7], Vector3::new(0., 1., 0.5));
    }

    #[test]
    fn test_will_fit_candidate() {
        let c = Cuboid::with_size(5., 5., 5., 10., 10., 10.);
        assert!(c.will_fit(Vector3::splat(5.), Cuboid::DEFAULT_BOUNDS));
        assert!(!c.will_fit(Vector3::new(5., 4.9, 5.), Cuboid::DEFAULT_BOUNDS));
        assert!(c.will_fit(Vector3::new(5., 4.9, 5.), Vector3::new(0., -1., 0.)));
    }

    #[test]
    fn test_move_to_unchecked_chains() {
        let mut c = Cuboid::new(0., 0., 0.);
        c.move_to_unchecked(-100., -100., -100.).rotate_x_unchecked();
        assert_eq!(c.center(), Vector3::splat(-100.));
        assert_bounds_consistent(&c);
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut c = Cuboid::with_size(5., 5., 5., 10., 10., 10.);
        let before = c.clone();
        assert!(!c.move_to(-12., 0., 2.));
        assert_eq!(c, before);
    }

    #[test]
    fn test_rotation_helpers() {
        assert!(Rotation::Rotated.is_rotated());
        assert_eq!(Rotation::Rotated.relocation(), None);
        let hint = Rotation::NeedsRelocation(Vector3::new(3., 5., 5.));
        assert!(!hint.is_rotated());
        assert_eq!(hint.relocation(), Some(Vector3::new(3., 5., 5.)));
    }

    #[test]
    fn test_rotate_x_within_pulls_off_x_plane() {
        let bounds = Vector3::new(4., 5., 10.);
        let mut c = Cuboid::with_size(4., 5., 10., 6., 6., 8.);
        assert_eq!(c.rotate_x_within(bounds), Rotation::NeedsRelocation(Vector3::new(7., 10., 15.)));
        assert_eq!(c.width(), 6.);
        assert_eq!(c.length(), 8.);
    }

    #[test]
    fn test_rotate_x_within_rotates_when_clear_of_bounds() {
        let bounds = Vector3::new(4., 5., 4.);
        let mut c = Cuboid::with_size(10., 10., 14., 6., 6., 8.);
        assert_eq!(c.rotate_x_within(bounds), Rotation::Rotated);
        assert_eq!(c.center(), Vector3::new(10., 10., 14.));
        assert_eq!((c.width(), c.length()), (8., 6.));
        assert_eq!(c.mins(), Vector3::new(7., 6., 11.));
    }

    #[test]
    fn test_bounds_invariant_after_mutations() {
        let mut c = Cuboid::with_size(1.5, -2., 7., 3., 5., 9.);
        assert_bounds_consistent(&c);
        c.move_to_unchecked(10., 20., 30.);
        assert_bounds_consistent(&c);
        c.rotate_x_unchecked();
        assert_bounds_consistent(&c);
        assert!(c.move_to(50., 50., 50.));
        assert_bounds_consistent(&c);
        assert!(c.rotate_x().is_rotated());
        assert_bounds_consistent(&c);
    }
}
