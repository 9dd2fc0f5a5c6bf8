// Baryon diffusion current boost to the local rest frame

use crate::basis::MilneBasis;
use nalgebra::Vector3;

/// Contravariant baryon diffusion current `V^mu` in lab (Milne) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct BaryonDiffusion {
    pub vt: f64,
    pub vx: f64,
    pub vy: f64,
    pub vn: f64,
}

/// Spatial diffusion components in the local rest frame (the time component
/// vanishes by orthogonality to the flow).
#[derive(Debug, Clone, Copy)]
pub struct BaryonDiffusionLrf {
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl BaryonDiffusion {
    pub fn new(vt: f64, vx: f64, vy: f64, vn: f64) -> Self {
        BaryonDiffusion { vt, vx, vy, vn }
    }

    /// Project `V^mu` onto the spatial tetrad vectors, lowering indices with
    /// the Milne metric `diag(1, -1, -1, -tau^2)`.
    pub fn boost_to_lrf(&self, basis: &MilneBasis, tau2: f64) -> BaryonDiffusionLrf {
        BaryonDiffusionLrf {
            vx: -self.vt * basis.xt
                + self.vx * basis.xx
                + self.vy * basis.xy
                + tau2 * self.vn * basis.xn,
            vy: self.vx * basis.yx + self.vy * basis.yy,
            vz: -self.vt * basis.zt + tau2 * self.vn * basis.zn,
        }
    }
}

impl BaryonDiffusionLrf {
    /// Euclidean magnitude of the LRF diffusion vector, the rejection-weight
    /// bound for the diffusion correction.
    pub fn max_magnitude(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy + self.vz * self.vz).sqrt()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.vx, self.vy, self.vz)
    }
}
