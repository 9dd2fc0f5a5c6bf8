// Freezeout surface element and its boost to the local rest frame

use crate::basis::MilneBasis;
use crate::four_velocity::FourVelocity;

/// Covariant surface normal `dsigma_mu` of a freezeout cell in lab (Milne)
/// coordinates, as written by the hydro code.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceElement {
    pub dsigma_t: f64,
    pub dsigma_x: f64,
    pub dsigma_y: f64,
    pub dsigma_n: f64,
}

/// Surface element expressed in the local rest frame. The spatial components
/// carry a sign convention such that they measure outward flux away from the
/// fluid.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceElementLrf {
    pub dsigma_t: f64,
    pub dsigma_x: f64,
    pub dsigma_y: f64,
    pub dsigma_z: f64,
}

impl SurfaceElement {
    pub fn new(dsigma_t: f64, dsigma_x: f64, dsigma_y: f64, dsigma_n: f64) -> Self {
        SurfaceElement {
            dsigma_t,
            dsigma_x,
            dsigma_y,
            dsigma_n,
        }
    }

    /// Project the covariant surface normal onto the tetrad `{u, X, Y, Z}`.
    ///
    /// `dsigma_mu` is covariant, so the contractions with the contravariant
    /// basis vectors need no extra metric factors.
    pub fn boost_to_lrf(&self, basis: &MilneBasis, u: &FourVelocity) -> SurfaceElementLrf {
        SurfaceElementLrf {
            dsigma_t: self.dsigma_t * u.ut
                + self.dsigma_x * u.ux
                + self.dsigma_y * u.uy
                + self.dsigma_n * u.un,
            dsigma_x: -(self.dsigma_t * basis.xt
                + self.dsigma_x * basis.xx
                + self.dsigma_y * basis.xy
                + self.dsigma_n * basis.xn),
            dsigma_y: -(self.dsigma_x * basis.yx + self.dsigma_y * basis.yy),
            dsigma_z: -(self.dsigma_t * basis.zt + self.dsigma_n * basis.zn),
        }
    }
}

impl SurfaceElementLrf {
    /// Upper bound `|dsigma_t| + |dsigma_spatial|` on the outward particle
    /// flux `p.dsigma / E` over all momentum directions, used to normalize
    /// the rejection-sampling acceptance probability.
    pub fn max_flux(&self) -> f64 {
        self.dsigma_t.abs()
            + (self.dsigma_x * self.dsigma_x
                + self.dsigma_y * self.dsigma_y
                + self.dsigma_z * self.dsigma_z)
                .sqrt()
    }
}
