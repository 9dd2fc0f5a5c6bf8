// Rectangular (T, muB) coefficient table with bilinear interpolation

use std::error::Error;
use std::fs;
use std::path::Path;

/// One delta-f coefficient tabulated on a uniform rectangular `(T, muB)`
/// grid, stored as a single contiguous row-major buffer (temperature is the
/// fast index).
///
/// File format, shared by all coefficient tables: two header integers
/// `points_T points_muB`, then `points_T * points_muB` rows of
/// `T muB value`, with `muB` as the slow index. The grid spacing is derived
/// from the first rows and every row is validated against it, so a malformed
/// or truncated file fails the load.
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    pub points_t: usize,
    pub points_mub: usize,
    pub t_min: f64,
    pub mub_min: f64,
    pub dt: f64,
    pub dmub: f64,
    values: Vec<f64>,
}

/// Relative tolerance for matching tabulated grid coordinates to the
/// uniform-grid reconstruction.
const GRID_TOLERANCE: f64 = 1.0e-9;

impl CoefficientTable {
    /// Load a table from a whitespace text file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read coefficient table '{}': {}", path.display(), e))?;
        Self::from_str_contents(&contents)
            .map_err(|e| format!("Malformed coefficient table '{}': {}", path.display(), e).into())
    }

    fn from_str_contents(contents: &str) -> Result<Self, Box<dyn Error>> {
        let mut tokens = contents.split_whitespace();
        let mut next_token = |what: &str| -> Result<f64, Box<dyn Error>> {
            let tok = tokens
                .next()
                .ok_or_else(|| format!("unexpected end of file reading {}", what))?;
            tok.parse::<f64>()
                .map_err(|e| format!("bad {} token '{}': {}", what, tok, e).into())
        };

        let points_t = next_token("points_T header")? as usize;
        let points_mub = next_token("points_muB header")? as usize;
        if points_t < 2 || points_mub < 1 {
            return Err(format!("invalid grid size {} x {}", points_t, points_mub).into());
        }

        let n = points_t * points_mub;
        let mut t_coords = Vec::with_capacity(n);
        let mut mub_coords = Vec::with_capacity(n);
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            t_coords.push(next_token("T column")?);
            mub_coords.push(next_token("muB column")?);
            values.push(next_token("coefficient column")?);
        }

        let t_min = t_coords[0];
        let mub_min = mub_coords[0];
        let dt = t_coords[1] - t_coords[0];
        let dmub = if points_mub > 1 {
            mub_coords[points_t] - mub_coords[0]
        } else {
            0.0
        };
        if dt <= 0.0 {
            return Err("temperature grid is not increasing".into());
        }
        if points_mub > 1 && dmub <= 0.0 {
            return Err("chemical potential grid is not increasing".into());
        }

        // Validate uniformity of the whole grid.
        for i_mub in 0..points_mub {
            for i_t in 0..points_t {
                let idx = i_mub * points_t + i_t;
                let t_expect = t_min + dt * i_t as f64;
                let mub_expect = mub_min + dmub * i_mub as f64;
                let scale = dt.max(1.0);
                if (t_coords[idx] - t_expect).abs() > GRID_TOLERANCE * scale
                    || (mub_coords[idx] - mub_expect).abs() > GRID_TOLERANCE * scale.max(dmub)
                {
                    return Err(format!(
                        "grid row {} is off the uniform grid: got ({}, {}), expected ({}, {})",
                        idx, t_coords[idx], mub_coords[idx], t_expect, mub_expect
                    )
                    .into());
                }
            }
        }

        Ok(CoefficientTable {
            points_t,
            points_mub,
            t_min,
            mub_min,
            dt,
            dmub,
            values,
        })
    }

    /// Tabulated value at grid indices `(i_t, i_mub)`.
    pub fn value(&self, i_t: usize, i_mub: usize) -> f64 {
        assert!(i_t < self.points_t && i_mub < self.points_mub);
        self.values[i_mub * self.points_t + i_t]
    }

    /// Temperature of grid column `i_t`.
    pub fn t_at(&self, i_t: usize) -> f64 {
        self.t_min + self.dt * i_t as f64
    }

    /// The full temperature grid (used to build the muB = 0 splines).
    pub fn t_grid(&self) -> Vec<f64> {
        (0..self.points_t).map(|i| self.t_at(i)).collect()
    }

    /// The muB = 0 slice of the table (first row).
    pub fn mub0_slice(&self) -> &[f64] {
        &self.values[..self.points_t]
    }

    /// Bilinear interpolation at `(T, muB)`.
    ///
    /// Queries outside the tabulated domain clamp to the nearest edge cell
    /// rather than extrapolate or fail. Exact at grid nodes and continuous
    /// across cell edges.
    pub fn bilinear(&self, t: f64, mub: f64) -> f64 {
        // Enclosing cell by floor division, clamped to the grid interior
        let it = (((t - self.t_min) / self.dt).floor() as isize)
            .clamp(0, self.points_t as isize - 2) as usize;
        let tf = ((t - self.t_at(it)) / self.dt).clamp(0.0, 1.0);

        if self.points_mub < 2 {
            let f_l = self.value(it, 0);
            let f_r = self.value(it + 1, 0);
            return f_l * (1.0 - tf) + f_r * tf;
        }

        let imub = (((mub - self.mub_min) / self.dmub).floor() as isize)
            .clamp(0, self.points_mub as isize - 2) as usize;
        let mub_l = self.mub_min + self.dmub * imub as f64;
        let sf = ((mub - mub_l) / self.dmub).clamp(0.0, 1.0);

        let f_ll = self.value(it, imub);
        let f_rl = self.value(it + 1, imub);
        let f_lr = self.value(it, imub + 1);
        let f_rr = self.value(it + 1, imub + 1);

        f_ll * (1.0 - tf) * (1.0 - sf)
            + f_rl * tf * (1.0 - sf)
            + f_lr * (1.0 - tf) * sf
            + f_rr * tf * sf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 x 2 grid over T = {0.1, 0.2, 0.3}, muB = {0.0, 0.5} with
    // value = T + 10*muB, linear so bilinear interpolation is exact.
    fn sample_table() -> CoefficientTable {
        let mut text = String::from("3 2\n");
        for &mub in &[0.0_f64, 0.5] {
            for i_t in 0..3 {
                let t = 0.1 + 0.1 * i_t as f64;
                text.push_str(&format!("{} {} {}\n", t, mub, t + 10.0 * mub));
            }
        }
        CoefficientTable::from_str_contents(&text).unwrap()
    }

    #[test]
    fn test_grid_parameters() {
        let table = sample_table();
        assert_eq!(table.points_t, 3);
        assert_eq!(table.points_mub, 2);
        assert!((table.t_min - 0.1).abs() < 1e-12);
        assert_eq!(table.mub_min, 0.0);
        assert!((table.dt - 0.1).abs() < 1e-12);
        assert!((table.dmub - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_exact_at_grid_nodes() {
        let table = sample_table();
        for i_mub in 0..2 {
            for i_t in 0..3 {
                let t = table.t_at(i_t);
                let mub = 0.5 * i_mub as f64;
                let expect = table.value(i_t, i_mub);
                assert_eq!(table.bilinear(t, mub), expect);
            }
        }
    }

    #[test]
    fn test_linear_function_reproduced() {
        let table = sample_table();
        let f = table.bilinear(0.17, 0.3);
        assert!((f - (0.17 + 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_across_cell_edge() {
        let table = sample_table();
        let eps = 1e-10;
        let below = table.bilinear(0.2 - eps, 0.25);
        let above = table.bilinear(0.2 + eps, 0.25);
        assert!((below - above).abs() < 1e-8);
    }

    #[test]
    fn test_out_of_range_clamps_to_edges() {
        let table = sample_table();
        assert_eq!(table.bilinear(0.01, -1.0), table.value(0, 0));
        assert_eq!(table.bilinear(5.0, 9.0), table.value(2, 1));
    }

    #[test]
    fn test_truncated_file_is_error() {
        let text = "3 2\n0.1 0.0 1.0\n0.2 0.0 2.0\n";
        assert!(CoefficientTable::from_str_contents(text).is_err());
    }

    #[test]
    fn test_nonuniform_grid_is_error() {
        let text = "2 1\n0.1 0.0 1.0\n0.25 0.0 2.0\n";
        // dt derived as 0.15 from the two rows, so this loads fine; a third
        // row off the grid must fail.
        assert!(CoefficientTable::from_str_contents(text).is_ok());
        let bad = "3 1\n0.1 0.0 1.0\n0.2 0.0 2.0\n0.35 0.0 3.0\n";
        assert!(CoefficientTable::from_str_contents(bad).is_err());
    }

    #[test]
    fn test_mub0_slice() {
        let table = sample_table();
        let slice = table.mub0_slice();
        assert_eq!(slice.len(), 3);
        for (i, v) in slice.iter().enumerate() {
            assert!((v - (0.1 + 0.1 * i as f64)).abs() < 1e-12);
        }
    }
}
