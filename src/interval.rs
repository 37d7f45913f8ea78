/*

    Responsible for creating a struct that represents
    the span [min, max] of a cuboid along one axis and
    functionality to check whether two spans overlap.

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// [center - extent/2, center + extent/2]
    /// Negative extent gives an inverted interval, see validate( )
    pub fn centered(center: Float, extent: Float) -> Self {
        let half = extent / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn center(&self) -> Float {
        (self.max + self.min) / 2.0
    }

    /// Strict overlap, so touching ends (self.max == other.min) do not count.
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.min < self.max && other.max > self.min
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let int = Interval::centered(4., 2.);
        assert_eq!(int, Interval::new(3., 5.));
        assert_eq!(int.size(), 2.);
        assert_eq!(int.center(), 4.);
        assert!(int.validate());

        let inverted = Interval::centered(0., -4.);
        assert!(!inverted.validate());
    }

    #[test]
    fn test_overlaps_is_strict() {
        let a = Interval::new(0., 20.);
        let b = Interval::new(20., 40.);
        let c = Interval::new(19.5, 40.);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }
}
