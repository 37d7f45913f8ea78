/*

    Declare numeric types used throughout this repo.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    Axis is used to walk over x, y, z of a Vector3
    without repeating the same line three times.

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::DVec3;
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3
pub type Vector3 = DVec3;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

/// x: height, y: width, z: length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn of(self, v: &Vector3) -> Float {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}
