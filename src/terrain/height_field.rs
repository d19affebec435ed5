use anyhow::{ensure, Result};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Truncation order used by the terrain demo.
pub const DEFAULT_ORDER: usize = 35;

/// Phase offsets are drawn uniformly from `[0, PHASE_RANGE)`.
const PHASE_RANGE: f64 = 500.0;

/// Configuration for spectral height-field synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightFieldConfig {
    /// Overall amplitude scale applied to every harmonic.
    pub amplitude: f64,

    /// Truncation order: the field sums `order * order` harmonics.
    pub order: usize,

    /// Random seed for the phase-offset table.
    pub seed: u64,
}

impl Default for HeightFieldConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            order: DEFAULT_ORDER,
            seed: 42,
        }
    }
}

/// Per-harmonic weight: zero for the constant `(0, 0)` term, otherwise the
/// amplitude divided by the radial wavenumber. High frequencies decay with
/// `1/sqrt(i^2 + j^2)`, which yields smooth mountain-like relief rather than
/// white noise.
pub fn spectral_weight(amplitude: f64, i: usize, j: usize) -> f64 {
    if i == 0 && j == 0 {
        0.0
    } else {
        amplitude / ((i * i + j * j) as f64).sqrt()
    }
}

/// Result of querying the height field at one domain point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Raw (un-normalized) height.
    pub height: f64,
    /// Unit surface normal, with `+Y` as the up axis.
    pub normal: Vec3,
}

/// A terrain height function synthesized as a truncated sum of weighted,
/// phase-shifted cosine harmonics over the unit square.
///
/// The phase table is generated once at construction and immutable
/// thereafter; sampling is read-only and deterministic.
#[derive(Debug, Clone)]
pub struct HeightField {
    amplitude: f64,
    order: usize,
    phases: Vec<f64>,
}

impl HeightField {
    /// Build a field with a seeded random phase table of `order^2` entries.
    pub fn new(config: &HeightFieldConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let phases = (0..config.order * config.order)
            .map(|_| rng.random_range(0.0..PHASE_RANGE))
            .collect();
        Self::with_phases(config.amplitude, config.order, phases)
    }

    /// Build a field from an explicit phase table.
    ///
    /// The table must hold at least `order^2` coefficients; a shorter table
    /// is a configuration error caught here, never mid-frame.
    pub fn with_phases(amplitude: f64, order: usize, phases: Vec<f64>) -> Result<Self> {
        ensure!(
            phases.len() >= order * order,
            "phase table holds {} coefficients but order {} needs {}",
            phases.len(),
            order,
            order * order
        );
        ensure!(
            amplitude.is_finite(),
            "amplitude must be finite, got {}",
            amplitude
        );
        Ok(Self {
            amplitude,
            order,
            phases,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sample height and analytic normal at `(x, y)`, both assumed in [0, 1].
    ///
    /// Height, `d/dx` and `d/dy` are three independent `O(order^2)` sums;
    /// the derivatives differentiate the cosine term in closed form, and the
    /// normal is the standard heightmap construction
    /// `normalize(-dh/dx, 1, -dh/dy)`.
    pub fn sample(&self, x: f32, y: f32) -> SurfaceSample {
        let x = x as f64 * PI - PI;
        let y = y as f64 * PI - PI;

        let height = self.height_sum(x, y);
        let dx = self.slope_sum_x(x, y);
        let dy = self.slope_sum_y(x, y);

        let normal = Vec3::new(-dx as f32, 1.0, -dy as f32).normalize();
        SurfaceSample { height, normal }
    }

    fn height_sum(&self, x: f64, y: f64) -> f64 {
        let n = self.order;
        let mut total = 0.0;
        for i in 0..n {
            for j in 0..n {
                let weight = spectral_weight(self.amplitude, i, j);
                let angle = i as f64 * x + j as f64 * y + self.phases[i * n + j];
                total += weight * angle.cos();
            }
        }
        total
    }

    fn slope_sum_x(&self, x: f64, y: f64) -> f64 {
        let n = self.order;
        let mut total = 0.0;
        for i in 0..n {
            for j in 0..n {
                let weight = spectral_weight(self.amplitude, i, j);
                let angle = i as f64 * x + j as f64 * y + self.phases[i * n + j];
                total += weight * -angle.sin() * i as f64;
            }
        }
        total
    }

    fn slope_sum_y(&self, x: f64, y: f64) -> f64 {
        let n = self.order;
        let mut total = 0.0;
        for i in 0..n {
            for j in 0..n {
                let weight = spectral_weight(self.amplitude, i, j);
                let angle = i as f64 * x + j as f64 * y + self.phases[i * n + j];
                total += weight * -angle.sin() * j as f64;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_of_constant_term_is_zero() {
        assert_eq!(spectral_weight(1.0, 0, 0), 0.0);
        assert_eq!(spectral_weight(123.4, 0, 0), 0.0);
    }

    #[test]
    fn weight_decays_with_wavenumber() {
        // A / sqrt(i^2 + j^2)
        assert!((spectral_weight(2.0, 3, 4) - 0.4).abs() < 1e-12);
        assert!((spectral_weight(2.0, 1, 0) - 2.0).abs() < 1e-12);
        assert!(spectral_weight(1.0, 1, 1) > spectral_weight(1.0, 5, 5));
    }

    #[test]
    fn sampling_is_deterministic() {
        let config = HeightFieldConfig::default();
        let a = HeightField::new(&config).unwrap();
        let b = HeightField::new(&config).unwrap();

        for &(x, y) in &[(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (1.0, 1.0)] {
            let sa = a.sample(x, y);
            let sb = b.sample(x, y);
            assert_eq!(
                sa.height.to_bits(),
                sb.height.to_bits(),
                "heights at ({}, {}) are not bit-identical",
                x,
                y
            );
            assert_eq!(sa.normal, sb.normal);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = HeightField::new(&HeightFieldConfig {
            seed: 1,
            ..Default::default()
        })
        .unwrap();
        let b = HeightField::new(&HeightFieldConfig {
            seed: 2,
            ..Default::default()
        })
        .unwrap();
        assert_ne!(a.sample(0.3, 0.6).height, b.sample(0.3, 0.6).height);
    }

    #[test]
    fn short_phase_table_is_rejected() {
        let result = HeightField::with_phases(0.5, 35, vec![0.0; 1224]);
        assert!(result.is_err(), "1224 phases must not satisfy order 35");
    }

    #[test]
    fn exact_phase_table_length_is_accepted() {
        // order 35 needs exactly 35^2 = 1225 phases
        let field = HeightField::with_phases(0.5, 35, vec![0.0; 1225]).unwrap();
        assert_eq!(field.order(), 35);
    }

    #[test]
    fn sample_is_finite_with_unit_normal() {
        let phases: Vec<f64> = (0..1225).map(|i| (i as f64 * 0.37) % 500.0).collect();
        let field = HeightField::with_phases(0.5, 35, phases).unwrap();

        let s = field.sample(0.5, 0.5);
        assert!(s.height.is_finite(), "height {} not finite", s.height);
        assert!(
            (s.normal.length() - 1.0).abs() < 1e-4,
            "normal {:?} not unit length",
            s.normal
        );
    }

    #[test]
    fn normal_points_up_on_average() {
        let field = HeightField::new(&HeightFieldConfig::default()).unwrap();
        for i in 0..10 {
            let t = i as f32 / 10.0;
            assert!(
                field.sample(t, 1.0 - t).normal.y > 0.0,
                "heightmap normals always keep a positive up component"
            );
        }
    }
}
