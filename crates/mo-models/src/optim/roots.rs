//! Real roots of a quadratic in closed form

use crate::poly::QuadraticModel;

/// Real roots of `a·x² + b·x + c = 0`, ascending
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// No real root (negative discriminant, or a degenerate equation)
    None,
    /// One real root (double root, or a linear equation)
    One(f64),
    /// Two distinct real roots, smaller first
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Solve `model(x) = 0`.
    ///
    /// `tolerance` is relative: a leading coefficient that small compared to
    /// the others is solved as a linear equation, and a slightly negative
    /// discriminant within it counts as a double root.
    pub fn solve(model: &QuadraticModel, tolerance: f64) -> Self {
        let QuadraticModel { a, b, c } = *model;
        let scale = a.abs().max(b.abs()).max(c.abs()).max(1.0);

        if a.abs() <= tolerance * scale {
            return Self::solve_linear(b, c, tolerance * scale);
        }

        let mut discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            let magnitude = (b * b).max((4.0 * a * c).abs());
            if discriminant < -tolerance * magnitude {
                return QuadraticRoots::None;
            }
            discriminant = 0.0;
        }

        if discriminant == 0.0 {
            return QuadraticRoots::One(-b / (2.0 * a));
        }

        // Avoid cancellation between -b and the square root
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        let r1 = q / a;
        let r2 = c / q;

        if r1 == r2 {
            QuadraticRoots::One(r1)
        } else if r1 < r2 {
            QuadraticRoots::Two(r1, r2)
        } else {
            QuadraticRoots::Two(r2, r1)
        }
    }

    fn solve_linear(b: f64, c: f64, zero: f64) -> Self {
        if b.abs() <= zero {
            QuadraticRoots::None
        } else {
            QuadraticRoots::One(-c / b)
        }
    }

    /// Roots as a vector, ascending
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            QuadraticRoots::None => Vec::new(),
            QuadraticRoots::One(r) => vec![r],
            QuadraticRoots::Two(r1, r2) => vec![r1, r2],
        }
    }

    /// Smallest root inside the closed interval `[lo, hi]`, widened by
    /// `slack` on both sides. A root in the widened margin is clamped onto
    /// the interval.
    pub fn first_within(&self, lo: f64, hi: f64, slack: f64) -> Option<f64> {
        self.to_vec()
            .into_iter()
            .find(|r| *r >= lo - slack && *r <= hi + slack)
            .map(|r| r.clamp(lo, hi))
    }
}
