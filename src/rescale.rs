// Momentum rescaling transform applying the viscous corrections in the LRF

use crate::diffusion::BaryonDiffusionLrf;
use crate::shear::ShearTensorLrf;
use nalgebra::Vector3;

/// A particle momentum in the local rest frame.
#[derive(Debug, Clone, Copy)]
pub struct LrfMomentum {
    pub e: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
}

impl LrfMomentum {
    /// Build an on-shell momentum from a mass squared and spatial components.
    pub fn on_shell(mass_squared: f64, px: f64, py: f64, pz: f64) -> Self {
        LrfMomentum {
            e: (mass_squared + px * px + py * py + pz * pz).sqrt(),
            px,
            py,
            pz,
        }
    }

    /// Invariant mass squared `E^2 - |p|^2`.
    pub fn invariant_mass_squared(&self) -> f64 {
        self.e * self.e - self.px * self.px - self.py * self.py - self.pz * self.pz
    }
}

/// Apply the viscous corrections to a trial momentum `p_mod` and return the
/// physically rescaled LRF momentum.
///
/// Three additive corrections act on the spatial components: the shear term
/// `shear_coeff * pi_LRF . p_mod`, the isotropic bulk term
/// `bulk_coeff * p_mod`, and the diffusion shift
/// `diff_coeff * (E * baryon_enthalpy_ratio + baryon) * V_LRF`. The energy is
/// then recomputed from the physical mass so the output is on shell.
#[allow(clippy::too_many_arguments)]
pub fn rescale_momentum(
    p_mod: &LrfMomentum,
    mass_squared: f64,
    pimunu: &ShearTensorLrf,
    vmu: &BaryonDiffusionLrf,
    shear_coeff: f64,
    bulk_coeff: f64,
    diff_coeff: f64,
    baryon: f64,
    baryon_enthalpy_ratio: f64,
) -> LrfMomentum {
    let p = Vector3::new(p_mod.px, p_mod.py, p_mod.pz);
    let diffusion_factor = diff_coeff * (p_mod.e * baryon_enthalpy_ratio + baryon);

    let p_lrf = p + shear_coeff * (pimunu.to_matrix() * p)
        + bulk_coeff * p
        + diffusion_factor * vmu.to_vector();

    LrfMomentum::on_shell(mass_squared, p_lrf.x, p_lrf.y, p_lrf.z)
}
