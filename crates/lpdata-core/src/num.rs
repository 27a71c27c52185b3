//! Double-double accumulation for sums that must not lose low-order bits.

use std::ops::{Add, AddAssign, Mul};

/// An unevaluated sum `hi + lo` of two `f64` values with `|lo| <= ulp(hi) / 2`.
///
/// Additions and products are carried out with error-free transformations,
/// so long dot products keep roughly twice the working precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompensatedF64 {
    hi: f64,
    lo: f64,
}

impl CompensatedF64 {
    pub fn new(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    /// The exact product `a * b` as a double-double. A product that is not
    /// finite carries no error term.
    pub fn product(a: f64, b: f64) -> Self {
        let hi = a * b;
        if !hi.is_finite() {
            return Self { hi, lo: 0.0 };
        }
        let lo = a.mul_add(b, -hi);
        Self { hi, lo }
    }

    /// Rounded value.
    pub fn value(self) -> f64 {
        self.hi + self.lo
    }

    pub fn hi(self) -> f64 {
        self.hi
    }

    pub fn lo(self) -> f64 {
        self.lo
    }
}

fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

// Requires |a| >= |b| or a == 0.
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

impl From<f64> for CompensatedF64 {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<CompensatedF64> for f64 {
    fn from(value: CompensatedF64) -> Self {
        value.value()
    }
}

impl AddAssign<CompensatedF64> for CompensatedF64 {
    fn add_assign(&mut self, rhs: CompensatedF64) {
        let (s, e) = two_sum(self.hi, rhs.hi);
        if !s.is_finite() {
            self.hi = s;
            self.lo = 0.0;
            return;
        }
        let e = e + self.lo + rhs.lo;
        let (hi, lo) = fast_two_sum(s, e);
        self.hi = hi;
        self.lo = lo;
    }
}

impl AddAssign<f64> for CompensatedF64 {
    fn add_assign(&mut self, rhs: f64) {
        *self += CompensatedF64::new(rhs);
    }
}

impl Add<CompensatedF64> for CompensatedF64 {
    type Output = CompensatedF64;

    fn add(mut self, rhs: CompensatedF64) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<f64> for CompensatedF64 {
    type Output = CompensatedF64;

    fn add(mut self, rhs: f64) -> Self::Output {
        self += rhs;
        self
    }
}

impl Mul<f64> for CompensatedF64 {
    type Output = CompensatedF64;

    fn mul(self, rhs: f64) -> Self::Output {
        let mut product = CompensatedF64::product(self.hi, rhs);
        product += self.lo * rhs;
        product
    }
}
