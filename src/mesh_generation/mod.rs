//! Regular point lattices over rectangular domains.
//!
//! A [`RectDomain`] describes the box `[x1, x2] × [y1, y2]` and the requested
//! spacings. [`build_grid`] turns it into a [`LatticeGrid`]: `nx` samples
//! along x and `ny` along y, both ends included, laid out row-major with x
//! varying fastest, so point `k` sits at column `k % nx`, row `k / nx`.

use serde::{Deserialize, Serialize};

use crate::mesh_error::{Axis, MeshError};
use crate::topology::point::{Point2, PointSet};

/// Rectangular domain and target grid spacing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectDomain {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub dx: f64,
    pub dy: f64,
}

impl RectDomain {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64, dx: f64, dy: f64) -> Self {
        RectDomain {
            x1,
            x2,
            y1,
            y2,
            dx,
            dy,
        }
    }

    /// Check bounds and spacings, without computing sample counts.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_bounds(Axis::X, self.x1, self.x2)?;
        check_bounds(Axis::Y, self.y1, self.y2)?;
        check_spacing(Axis::X, self.dx)?;
        check_spacing(Axis::Y, self.dy)?;
        Ok(())
    }

    /// Sample counts `(nx, ny) = (floor((x2-x1)/dx), floor((y2-y1)/dy))`.
    ///
    /// Fails with [`MeshError::DegenerateGrid`] if either count is below 2.
    pub fn sample_counts(&self) -> Result<(usize, usize), MeshError> {
        self.validate()?;
        let nx = sample_count(self.x2 - self.x1, self.dx);
        let ny = sample_count(self.y2 - self.y1, self.dy);
        if nx < 2 || ny < 2 {
            return Err(MeshError::DegenerateGrid { nx, ny });
        }
        check_lattice_size(nx, ny)?;
        Ok((nx, ny))
    }
}

/// A row-major `nx × ny` lattice of points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeGrid {
    pub nx: usize,
    pub ny: usize,
    pub points: PointSet,
}

impl LatticeGrid {
    /// Index of the sample in column `i`, row `j`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Number of rectangular cells, `(nx-1) * (ny-1)`.
    pub fn num_cells(&self) -> usize {
        (self.nx - 1) * (self.ny - 1)
    }
}

fn check_bounds(axis: Axis, lower: f64, upper: f64) -> Result<(), MeshError> {
    if lower.is_finite() && upper.is_finite() && lower < upper {
        Ok(())
    } else {
        Err(MeshError::InvalidDomain { axis, lower, upper })
    }
}

fn check_spacing(axis: Axis, spacing: f64) -> Result<(), MeshError> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidSpacing { axis, spacing })
    }
}

/// Largest number of points a [`PointSet`] can hold.
pub const MAX_POINTS: usize = isize::MAX as usize / std::mem::size_of::<Point2>();

/// Fail with [`MeshError::GridTooLarge`] unless `nx * ny` points fit in memory.
pub fn check_lattice_size(nx: usize, ny: usize) -> Result<usize, MeshError> {
    nx.checked_mul(ny)
        .filter(|&n| n <= MAX_POINTS)
        .ok_or(MeshError::GridTooLarge { nx, ny })
}

fn sample_count(extent: f64, spacing: f64) -> usize {
    let ratio = (extent / spacing).floor();
    if ratio.is_finite() && ratio > 0.0 {
        ratio as usize
    } else {
        0
    }
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The last sample is exactly `stop`. Requires `n >= 2`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "linspace needs at least two samples");
    let step = (stop - start) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    if let Some(last) = samples.last_mut() {
        *last = stop;
    }
    samples
}

/// Build the lattice for `domain`.
pub fn build_grid(domain: &RectDomain) -> Result<LatticeGrid, MeshError> {
    let (nx, ny) = domain.sample_counts()?;
    let xs = linspace(domain.x1, domain.x2, nx);
    let ys = linspace(domain.y1, domain.y2, ny);

    let points: PointSet = ys
        .iter()
        .flat_map(|&y| xs.iter().map(move |&x| Point2::new(x, y)))
        .collect();
    log::debug!(
        "grid: {nx}x{ny} lattice over [{}, {}]x[{}, {}]",
        domain.x1,
        domain.x2,
        domain.y1,
        domain.y2
    );

    Ok(LatticeGrid { nx, ny, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let s = linspace(0.0, 1.0, 5);
        assert_eq!(s, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let s = linspace(-1.0, 0.3, 2);
        assert_eq!(s, vec![-1.0, 0.3]);
    }

    #[test]
    fn counts_truncate() {
        let d = RectDomain::new(0.0, 1.0, 0.0, 2.0, 0.3, 0.5);
        assert_eq!(d.sample_counts().unwrap(), (3, 4));
    }

    #[test]
    fn tiny_spacing_is_too_large_not_a_panic() {
        let d = RectDomain::new(0.0, 1.0, 0.0, 1.0, 1e-300, 0.5);
        assert!(matches!(
            d.sample_counts(),
            Err(MeshError::GridTooLarge { ny: 2, .. })
        ));
        assert!(build_grid(&d).is_err());
        assert_eq!(check_lattice_size(4, 5), Ok(20));
        assert!(check_lattice_size(MAX_POINTS, 2).is_err());
    }

    #[test]
    fn reversed_bounds_rejected() {
        let d = RectDomain::new(1.0, 0.0, 0.0, 1.0, 0.1, 0.1);
        assert!(matches!(
            d.validate(),
            Err(MeshError::InvalidDomain { axis: Axis::X, .. })
        ));
        let d = RectDomain::new(0.0, 1.0, 2.0, 2.0, 0.1, 0.1);
        assert!(matches!(
            d.validate(),
            Err(MeshError::InvalidDomain { axis: Axis::Y, .. })
        ));
        let d = RectDomain::new(f64::NAN, 1.0, 0.0, 1.0, 0.1, 0.1);
        assert!(matches!(d.validate(), Err(MeshError::InvalidDomain { .. })));
    }

    #[test]
    fn bad_spacing_rejected() {
        for dx in [0.0, -0.5, f64::INFINITY, f64::NAN] {
            let d = RectDomain::new(0.0, 1.0, 0.0, 1.0, dx, 0.1);
            assert!(matches!(
                d.validate(),
                Err(MeshError::InvalidSpacing { axis: Axis::X, .. })
            ));
        }
        let d = RectDomain::new(0.0, 1.0, 0.0, 1.0, 0.1, -1.0);
        assert!(matches!(
            d.validate(),
            Err(MeshError::InvalidSpacing { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn lattice_indexing_is_row_major() {
        let grid = build_grid(&RectDomain::new(0.0, 2.0, 0.0, 1.0, 0.5, 0.5)).unwrap();
        assert_eq!((grid.nx, grid.ny), (4, 2));
        assert_eq!(grid.num_cells(), 3);
        let p = grid.points[grid.index(3, 1)];
        assert_eq!(p, Point2::new(2.0, 1.0));
        let p = grid.points[grid.index(1, 0)];
        assert_eq!(p, Point2::new(2.0 / 3.0, 0.0));
    }
}
