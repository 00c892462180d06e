use crate::core::models::coords::CoordinateView;
use nalgebra::Point3;
use std::ops::Range;

/// An axis-aligned box, already padded by the search cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl BoundingBox {
    /// A box with every minimum at +inf and every maximum at -inf. Contains nothing.
    pub const EMPTY: BoundingBox = BoundingBox {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
        z_min: f64::INFINITY,
        z_max: f64::NEG_INFINITY,
    };

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max || self.z_min > self.z_max
    }

    /// Inclusive check on all six bounds.
    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        p.x >= self.x_min
            && p.x <= self.x_max
            && p.y >= self.y_min
            && p.y <= self.y_max
            && p.z >= self.z_min
            && p.z <= self.z_max
    }

    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
            0.5 * (self.z_min + self.z_max),
        )
    }

    /// Squared radius of the sphere through all eight corners.
    pub fn circumradius_squared(&self) -> f64 {
        let dx = 0.5 * (self.x_max - self.x_min);
        let dy = 0.5 * (self.y_max - self.y_min);
        let dz = 0.5 * (self.z_max - self.z_min);
        dx * dx + dy * dy + dz * dz
    }

    fn include(&mut self, p: &Point3<f64>) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
        self.z_min = self.z_min.min(p.z);
        self.z_max = self.z_max.max(p.z);
    }

    fn padded(mut self, padding: f64) -> Self {
        self.x_min -= padding;
        self.x_max += padding;
        self.y_min -= padding;
        self.y_max += padding;
        self.z_min -= padding;
        self.z_max += padding;
        self
    }
}

/// Computes the box enclosing the atoms in `atoms`, padded by `cutoff` on every side.
///
/// An empty range yields a box that contains no point.
pub fn bounding_box(coords: &CoordinateView, atoms: Range<usize>, cutoff: f64) -> BoundingBox {
    let mut bbox = BoundingBox::EMPTY;
    for i in atoms {
        bbox.include(&coords.point(i));
    }
    bbox.padded(cutoff)
}

#[inline]
pub fn squared_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(x: &'a [f32], y: &'a [f32], z: &'a [f32]) -> CoordinateView<'a> {
        CoordinateView::new(x, y, z).unwrap()
    }

    #[test]
    fn bounding_box_pads_extrema_by_cutoff() {
        let (x, y, z) = ([1.0, 3.0], [-2.0, 4.0], [0.0, 0.5]);
        let bbox = bounding_box(&view(&x, &y, &z), 0..2, 1.0);
        assert_eq!(
            bbox,
            BoundingBox {
                x_min: 0.0,
                x_max: 4.0,
                y_min: -3.0,
                y_max: 5.0,
                z_min: -1.0,
                z_max: 1.5,
            }
        );
    }

    #[test]
    fn bounding_box_scans_unsorted_atoms() {
        let (x, y, z) = ([5.0, -5.0, 0.0], [0.0; 3], [0.0; 3]);
        let bbox = bounding_box(&view(&x, &y, &z), 0..3, 0.0);
        assert_eq!(bbox.x_min, -5.0);
        assert_eq!(bbox.x_max, 5.0);
    }

    #[test]
    fn bounding_box_honours_the_atom_range() {
        let (x, y, z) = ([100.0, 1.0, 2.0, -100.0], [0.0; 4], [0.0; 4]);
        let bbox = bounding_box(&view(&x, &y, &z), 1..3, 0.5);
        assert_eq!(bbox.x_min, 0.5);
        assert_eq!(bbox.x_max, 2.5);
    }

    #[test]
    fn negative_only_coordinates_keep_a_negative_maximum() {
        let (x, y, z) = ([-4.0, -6.0], [-1.0, -2.0], [-3.0, -3.0]);
        let bbox = bounding_box(&view(&x, &y, &z), 0..2, 0.0);
        assert_eq!(bbox.x_max, -4.0);
        assert_eq!(bbox.y_max, -1.0);
        assert_eq!(bbox.z_max, -3.0);
    }

    #[test]
    fn empty_range_produces_box_that_contains_nothing() {
        let (x, y, z) = ([0.0], [0.0], [0.0]);
        let bbox = bounding_box(&view(&x, &y, &z), 0..0, 5.0);
        assert!(bbox.is_empty());
        assert!(!bbox.contains(&Point3::origin()));
    }

    #[test]
    fn contains_is_inclusive_on_every_face() {
        let (x, y, z) = ([0.0], [0.0], [0.0]);
        let bbox = bounding_box(&view(&x, &y, &z), 0..1, 2.0);
        assert!(bbox.contains(&Point3::new(2.0, -2.0, 2.0)));
        assert!(!bbox.contains(&Point3::new(2.0001, 0.0, 0.0)));
    }

    #[test]
    fn circumsphere_reaches_every_corner() {
        let (x, y, z) = ([0.0, 2.0], [0.0, 4.0], [0.0, 6.0]);
        let bbox = bounding_box(&view(&x, &y, &z), 0..2, 0.0);
        let corner = Point3::new(bbox.x_max, bbox.y_min, bbox.z_max);
        assert_eq!(bbox.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(
            squared_distance(&bbox.center(), &corner),
            bbox.circumradius_squared()
        );
    }
}
