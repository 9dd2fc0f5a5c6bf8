// Natural cubic spline interpolation over a strictly increasing knot vector

use std::error::Error;

/// Natural cubic spline: second derivatives vanish at the end knots.
///
/// Used for the delta-f coefficient slices along muB = 0 (where clamped
/// evaluation matches the table-edge convention) and for the inversion of
/// the Jonah bulk-pressure table (where out-of-range queries are a domain
/// error and callers use [`CubicSpline::eval_checked`]).
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    y2: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline through `(x, y)` pairs. `x` must be strictly
    /// increasing with at least two knots.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, Box<dyn Error>> {
        if x.len() != y.len() {
            return Err(format!("spline knot count mismatch: {} x vs {} y", x.len(), y.len()).into());
        }
        if x.len() < 2 {
            return Err("spline needs at least two knots".into());
        }
        for w in x.windows(2) {
            if w[1] <= w[0] {
                return Err(format!("spline knots not strictly increasing at x = {}", w[1]).into());
            }
        }

        // Solve the tridiagonal system for the second derivatives with
        // natural boundary conditions (y2 = 0 at both ends).
        let n = x.len();
        let mut y2 = vec![0.0; n];
        let mut u = vec![0.0; n];
        for i in 1..n - 1 {
            let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let slope_diff =
                (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
            u[i] = (6.0 * slope_diff / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
        }
        for k in (0..n - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Ok(CubicSpline { x, y, y2 })
    }

    /// Domain of the spline as `(x_min, x_max)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    // Binary search for the largest knot index with x[idx] <= x_new
    fn locate(&self, x_new: f64) -> usize {
        let mut low = 0usize;
        let mut high = self.x.len() - 1;
        while high - low > 1 {
            let mid = (low + high) >> 1;
            if self.x[mid] <= x_new {
                low = mid;
            } else {
                high = mid;
            }
        }
        low
    }

    fn eval_segment(&self, x_new: f64) -> f64 {
        let idx = self.locate(x_new);
        let h = self.x[idx + 1] - self.x[idx];
        let a = (self.x[idx + 1] - x_new) / h;
        let b = (x_new - self.x[idx]) / h;
        a * self.y[idx]
            + b * self.y[idx + 1]
            + ((a * a * a - a) * self.y2[idx] + (b * b * b - b) * self.y2[idx + 1]) * h * h / 6.0
    }

    /// Evaluate the spline, clamping to the end knot values outside the
    /// domain (the same edge convention as the bilinear tables).
    pub fn eval(&self, x_new: f64) -> f64 {
        if x_new <= self.x[0] {
            return self.y[0];
        }
        if x_new >= self.x[self.x.len() - 1] {
            return self.y[self.y.len() - 1];
        }
        self.eval_segment(x_new)
    }

    /// Evaluate the spline, reporting an error outside the domain.
    pub fn eval_checked(&self, x_new: f64) -> Result<f64, Box<dyn Error>> {
        let (lo, hi) = self.domain();
        if x_new < lo || x_new > hi {
            return Err(format!(
                "spline query x = {} outside tabulated domain [{}, {}]",
                x_new, lo, hi
            )
            .into());
        }
        if x_new >= hi {
            return Ok(self.y[self.y.len() - 1]);
        }
        Ok(self.eval_segment(x_new))
    }
}
