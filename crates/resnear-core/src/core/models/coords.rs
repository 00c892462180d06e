use super::structure::{StructureError, StructureSource};
use nalgebra::Point3;

/// A borrowed view over a structure's parallel x/y/z coordinate arrays.
///
/// Constructing the view checks that the three arrays have the same length, so every
/// index below [`len`](Self::len) is valid for all three axes.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateView<'a> {
    x: &'a [f32],
    y: &'a [f32],
    z: &'a [f32],
}

impl<'a> CoordinateView<'a> {
    pub fn new(x: &'a [f32], y: &'a [f32], z: &'a [f32]) -> Result<Self, StructureError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(StructureError::CoordinateLengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    pub fn from_source<S: StructureSource + ?Sized>(source: &'a S) -> Result<Self, StructureError> {
        Self::new(source.x_coords(), source.y_coords(), source.z_coords())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Point3<f64> {
        Point3::new(
            f64::from(self.x[index]),
            f64::from(self.y[index]),
            f64::from(self.z[index]),
        )
    }

    pub fn points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        (0..self.len()).map(|i| self.point(i))
    }
}
