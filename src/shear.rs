// Shear stress tensor boost from Milne lab coordinates to the local rest frame

use crate::basis::MilneBasis;
use nalgebra::Matrix3;

/// Contravariant shear stress tensor `pi^{mu nu}` in lab (Milne) coordinates:
/// symmetric and traceless, ten independent components.
#[derive(Debug, Clone, Copy)]
pub struct ShearTensor {
    pub pitt: f64,
    pub pitx: f64,
    pub pity: f64,
    pub pitn: f64,
    pub pixx: f64,
    pub pixy: f64,
    pub pixn: f64,
    pub piyy: f64,
    pub piyn: f64,
    pub pinn: f64,
}

/// Spatial shear components in the local rest frame. `pizz` is fixed by the
/// traceless constraint rather than contracted, so the trace vanishes exactly
/// in floating point.
#[derive(Debug, Clone, Copy)]
pub struct ShearTensorLrf {
    pub pixx: f64,
    pub pixy: f64,
    pub pixz: f64,
    pub piyy: f64,
    pub piyz: f64,
    pub pizz: f64,
}

impl ShearTensor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pitt: f64,
        pitx: f64,
        pity: f64,
        pitn: f64,
        pixx: f64,
        pixy: f64,
        pixn: f64,
        piyy: f64,
        piyn: f64,
        pinn: f64,
    ) -> Self {
        ShearTensor {
            pitt,
            pitx,
            pity,
            pitn,
            pixx,
            pixy,
            pixn,
            piyy,
            piyn,
            pinn,
        }
    }

    /// Contract `pi^{mu nu}` against pairs of tetrad vectors to get the
    /// spatial components in the local rest frame: `pi_ij = X_(i).pi.X_(j)`
    /// with indices lowered by the Milne metric `diag(1, -1, -1, -tau^2)`.
    ///
    /// The cross terms in `pi_xy` and `pi_xz` contract the full time
    /// component of X (`-pitx*Xt`, `-pity*Xt`); an earlier version of this
    /// formula dropped `Xt` from the `Yy` term and produced a wrong sign.
    pub fn boost_to_lrf(&self, basis: &MilneBasis, tau2: f64) -> ShearTensorLrf {
        let MilneBasis {
            xt,
            xx,
            xy,
            xn,
            yx,
            yy,
            zt,
            zn,
        } = *basis;

        let pixx_lrf = self.pitt * xt * xt
            + self.pixx * xx * xx
            + self.piyy * xy * xy
            + tau2 * tau2 * self.pinn * xn * xn
            + 2.0
                * (-xt * (self.pitx * xx + self.pity * xy)
                    + self.pixy * xx * xy
                    + tau2 * xn * (self.pixn * xx + self.piyn * xy - self.pitn * xt));

        let pixy_lrf = yx * (-self.pitx * xt + self.pixx * xx + self.pixy * xy + tau2 * self.pixn * xn)
            + yy * (-self.pity * xt + self.pixy * xx + self.piyy * xy + tau2 * self.piyn * xn);

        let pixz_lrf = zt * (self.pitt * xt - self.pitx * xx - self.pity * xy - tau2 * self.pitn * xn)
            - tau2
                * zn
                * (self.pitn * xt - self.pixn * xx - self.piyn * xy - tau2 * self.pinn * xn);

        let piyy_lrf = self.pixx * yx * yx + self.piyy * yy * yy + 2.0 * self.pixy * yx * yy;

        let piyz_lrf =
            -zt * (self.pitx * yx + self.pity * yy) + tau2 * zn * (self.pixn * yx + self.piyn * yy);

        ShearTensorLrf {
            pixx: pixx_lrf,
            pixy: pixy_lrf,
            pixz: pixz_lrf,
            piyy: piyy_lrf,
            piyz: piyz_lrf,
            pizz: -(pixx_lrf + piyy_lrf),
        }
    }
}

impl ShearTensorLrf {
    /// Frobenius norm `sqrt(pi_ij pi_ij)` of the LRF tensor, the bound used
    /// to normalize the shear-corrected rejection-sampling weight.
    pub fn max_magnitude(&self) -> f64 {
        (self.pixx * self.pixx
            + self.piyy * self.piyy
            + self.pizz * self.pizz
            + 2.0 * (self.pixy * self.pixy + self.pixz * self.pixz + self.piyz * self.piyz))
            .sqrt()
    }

    /// The symmetric 3x3 matrix acting on spatial momenta in the rescaling
    /// transform.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.pixx, self.pixy, self.pixz, //
            self.pixy, self.piyy, self.piyz, //
            self.pixz, self.piyz, self.pizz,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::four_velocity::FourVelocity;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Random symmetric traceless lab tensor orthogonal checks are covered by
    // the trace identity; orthogonality to u is a hydro-side property.
    fn random_shear(rng: &mut StdRng) -> ShearTensor {
        let pixx: f64 = rng.gen_range(-1.0..1.0);
        let piyy: f64 = rng.gen_range(-1.0..1.0);
        ShearTensor::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            pixx,
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            piyy,
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
    }

    #[test]
    fn test_lrf_tensor_is_traceless_exactly() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let tau = rng.gen_range(0.5..5.0);
            let u = FourVelocity::from_spatial(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-0.5..0.5),
                tau,
            );
            let basis = MilneBasis::new(&u);
            let lrf = random_shear(&mut rng).boost_to_lrf(&basis, tau * tau);
            assert_eq!(lrf.pixx + lrf.piyy + lrf.pizz, 0.0);
        }
    }

    #[test]
    fn test_identity_boost_leaves_components() {
        let u = FourVelocity::from_spatial(0.0, 0.0, 0.0, 1.0);
        let basis = MilneBasis::new(&u);
        // Only pi^xy nonzero
        let pi = ShearTensor::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        let lrf = pi.boost_to_lrf(&basis, 1.0);
        assert!((lrf.pixy - 1.0).abs() < 1e-14);
        assert_eq!(lrf.pixx, 0.0);
        assert_eq!(lrf.pixz, 0.0);
        assert_eq!(lrf.piyy, 0.0);
        assert_eq!(lrf.piyz, 0.0);
        assert_eq!(lrf.pizz, 0.0);
    }

    #[test]
    fn test_identity_boost_general_tensor() {
        let u = FourVelocity::from_spatial(0.0, 0.0, 0.0, 1.0);
        let basis = MilneBasis::new(&u);
        // Traceless spatial tensor with pi^tt = pi^t i = 0, pi^nn = -(pixx+piyy)
        let pi = ShearTensor::new(0.0, 0.0, 0.0, 0.0, 0.3, -0.1, 0.2, 0.5, -0.4, -0.8);
        let lrf = pi.boost_to_lrf(&basis, 1.0);
        assert!((lrf.pixx - 0.3).abs() < 1e-14);
        assert!((lrf.pixy + 0.1).abs() < 1e-14);
        assert!((lrf.pixz - 0.2).abs() < 1e-14);
        assert!((lrf.piyy - 0.5).abs() < 1e-14);
        assert!((lrf.piyz + 0.4).abs() < 1e-14);
        assert!((lrf.pizz + 0.8).abs() < 1e-14);
    }

    #[test]
    fn test_max_magnitude_is_frobenius_norm() {
        let lrf = ShearTensorLrf {
            pixx: 1.0,
            pixy: 0.0,
            pixz: 0.0,
            piyy: 1.0,
            piyz: 0.0,
            pizz: -2.0,
        };
        assert!((lrf.max_magnitude() - 6.0_f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn test_to_matrix_is_symmetric() {
        let lrf = ShearTensorLrf {
            pixx: 0.1,
            pixy: 0.2,
            pixz: 0.3,
            piyy: 0.4,
            piyz: 0.5,
            pizz: -0.5,
        };
        let m = lrf.to_matrix();
        assert_eq!(m, m.transpose());
    }
}
