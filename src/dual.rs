//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual`] carries a function value together with its derivative payload.
//! Arithmetic and the elementary transcendental functions propagate the
//! derivative by the product, quotient and chain rules, so a parametric
//! surface written against [`ParametricSurface`] gets exact analytic partial
//! derivatives (and from them, surface normals) without any hand-derived
//! formulas.

use glam::Vec2;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Derivative payloads a [`Dual`] can carry: a plain `f32` for univariate
/// functions, or `glam::Vec2` for gradients with respect to a 2D parameter.
pub trait Derivative:
    Copy
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
}

impl<T> Derivative for T where
    T: Copy
        + Default
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + Mul<f32, Output = T>
        + Div<f32, Output = T>
{
}

/// A function value paired with its derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<D> {
    /// Function value.
    pub val: f32,
    /// Derivative of the function at `val`.
    pub der: D,
}

/// Dual number whose derivative is a gradient over a 2D `(u, v)` parameter.
pub type Dual2 = Dual<Vec2>;

impl<D: Derivative> Dual<D> {
    pub fn new(val: f32, der: D) -> Self {
        Self { val, der }
    }

    /// A constant: its derivative is zero.
    pub fn constant(val: f32) -> Self {
        Self::new(val, D::default())
    }

    pub fn exp(self) -> Self {
        Self::new(self.val.exp(), self.der * self.val.exp())
    }

    pub fn sin(self) -> Self {
        Self::new(self.val.sin(), self.der * self.val.cos())
    }

    pub fn cos(self) -> Self {
        Self::new(self.val.cos(), self.der * -self.val.sin())
    }

    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    pub fn sinh(self) -> Self {
        Self::new(self.val.sinh(), self.der * self.val.cosh())
    }

    pub fn cosh(self) -> Self {
        Self::new(self.val.cosh(), self.der * self.val.sinh())
    }

    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    pub fn ln(self) -> Self {
        Self::new(self.val.ln(), self.der / self.val)
    }

    pub fn powf(self, n: f32) -> Self {
        Self::new(self.val.powf(n), self.der * (n * self.val.powf(n - 1.0)))
    }
}

impl Dual<Vec2> {
    /// Seed the `u` coordinate of a 2D parameter: derivative `(1, 0)`.
    pub fn var_u(u: f32) -> Self {
        Self::new(u, Vec2::X)
    }

    /// Seed the `v` coordinate of a 2D parameter: derivative `(0, 1)`.
    pub fn var_v(v: f32) -> Self {
        Self::new(v, Vec2::Y)
    }
}

impl<D: Derivative> Add for Dual<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.der + rhs.der)
    }
}

impl<D: Derivative> Sub for Dual<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.der - rhs.der)
    }
}

impl<D: Derivative> Mul for Dual<D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // product rule
        Self::new(
            self.val * rhs.val,
            self.der * rhs.val + rhs.der * self.val,
        )
    }
}

/// Quotient rule. Dividing by a dual whose value component is zero produces
/// IEEE infinities or NaNs, same as scalar division; it is not an error.
impl<D: Derivative> Div for Dual<D> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.val / rhs.val,
            (self.der * rhs.val - rhs.der * self.val) / (rhs.val * rhs.val),
        )
    }
}

impl<D: Derivative> Neg for Dual<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.val, -self.der)
    }
}

impl<D: Derivative> Add<f32> for Dual<D> {
    type Output = Self;

    fn add(self, rhs: f32) -> Self {
        Self::new(self.val + rhs, self.der)
    }
}

impl<D: Derivative> Sub<f32> for Dual<D> {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self {
        Self::new(self.val - rhs, self.der)
    }
}

impl<D: Derivative> Mul<f32> for Dual<D> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.val * rhs, self.der * rhs)
    }
}

/// A surface `r(u, v)` evaluated on dual numbers.
///
/// Seeding `u` and `v` with [`Dual2::var_u`] / [`Dual2::var_v`] makes the
/// returned coordinates carry `(∂/∂u, ∂/∂v)` in their derivative components,
/// so the caller can assemble the tangent vectors ∂r/∂u and ∂r/∂v and take
/// their cross product for the normal.
pub trait ParametricSurface {
    /// Evaluate `(x, y, z)` at the given parameter point.
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3];
}
