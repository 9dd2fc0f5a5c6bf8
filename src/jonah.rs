// Jonah-mode nonlinear rescaling table: lambda^2(bulkPi/Peq) and z(bulkPi/Peq)

use crate::hadrons::Hadron;
use crate::quadrature::{equilibrium_distribution, GAUSS_LAGUERRE_32};
use crate::spline::CubicSpline;
use std::error::Error;

/// Number of lambda interpolation points.
pub const JONAH_POINTS: usize = 301;
/// Lambda grid bounds.
pub const LAMBDA_MIN: f64 = -1.0;
pub const LAMBDA_MAX: f64 = 2.0;

// The Jonah distribution is a muB = 0 scheme; its table is solved at the
// switching temperature of the equilibrium hadron gas.
const T_REFERENCE: f64 = 0.155; // GeV

/// The Jonah-mode correction table: for each lambda in [-1, 2] the momentum
/// scale squared `(1 + lambda)^2`, the renormalization `z` (detLambda
/// excluded) and the resulting `bulkPi / P_eq`, with cubic splines inverting
/// the last column.
///
/// The rescaled distribution is `f(p) = z feq(sqrt(m^2 + p^2/(1+lambda)^2))`:
/// Landau matching of the energy density fixes `z(lambda)` and the pressure
/// excess gives `bulkPi`. Massless species are excluded from the integrals;
/// the massless Bose distribution makes them singular at lambda = -1.
#[derive(Debug, Clone)]
pub struct JonahTable {
    pub lambda_scale_squared: Vec<f64>,
    pub z: Vec<f64>,
    pub bulk_pi_over_peq: Vec<f64>,
    pub bulk_pi_over_peq_max: f64,
    lambda_squared_spline: CubicSpline,
    z_spline: CubicSpline,
}

impl JonahTable {
    /// Solve the table by thermal integrals over the hadron list.
    pub fn compute(hadrons: &[Hadron]) -> Result<Self, Box<dyn Error>> {
        let massive: Vec<&Hadron> = hadrons.iter().filter(|h| h.mass > 0.0).collect();
        if massive.is_empty() {
            return Err("Jonah table needs at least one massive hadron".into());
        }

        let rule = &*GAUSS_LAGUERRE_32;

        // Equilibrium energy density and pressure (common T^4 g/(2 pi^2)
        // prefactors kept so species add with their own degeneracies)
        let mut e_eq = 0.0;
        let mut p_eq = 0.0;
        for h in &massive {
            let x = h.mass / T_REFERENCE;
            let sign = h.quantum_sign();
            e_eq += h.degeneracy
                * rule.integrate(|q| {
                    let e_bar = (q * q + x * x).sqrt();
                    q * q * e_bar * equilibrium_distribution(e_bar, sign)
                });
            p_eq += h.degeneracy
                * rule.integrate(|q| {
                    let e_bar = (q * q + x * x).sqrt();
                    q * q * q * q / e_bar * equilibrium_distribution(e_bar, sign) / 3.0
                });
        }

        let delta_lambda = (LAMBDA_MAX - LAMBDA_MIN) / (JONAH_POINTS as f64 - 1.0);
        let mut lambda_scale_squared = Vec::with_capacity(JONAH_POINTS);
        let mut z = Vec::with_capacity(JONAH_POINTS);
        let mut bulk_pi_over_peq = Vec::with_capacity(JONAH_POINTS);

        for i in 0..JONAH_POINTS {
            let lambda = LAMBDA_MIN + delta_lambda * i as f64;
            let scale = 1.0 + lambda;

            // Rescaled-distribution energy density and pressure with z and
            // detLambda = scale^3 factored out; substituting p = scale q
            // turns both into integrals over the equilibrium occupation.
            let mut e_mod = 0.0;
            let mut p_mod = 0.0;
            for h in &massive {
                let x = h.mass / T_REFERENCE;
                let sign = h.quantum_sign();
                e_mod += h.degeneracy
                    * rule.integrate(|q| {
                        let e_bar = (q * q + x * x).sqrt();
                        let e_scaled = (scale * scale * q * q + x * x).sqrt();
                        q * q * e_scaled * equilibrium_distribution(e_bar, sign)
                    });
                p_mod += h.degeneracy
                    * rule.integrate(|q| {
                        let e_bar = (q * q + x * x).sqrt();
                        let e_scaled = (scale * scale * q * q + x * x).sqrt();
                        scale * scale * q * q * q * q / e_scaled
                            * equilibrium_distribution(e_bar, sign)
                            / 3.0
                    });
            }

            // Landau matching E_mod = E_eq fixes z; the pressure excess of
            // the matched distribution gives bulkPi.
            let z_i = e_eq / e_mod;
            lambda_scale_squared.push(scale * scale);
            z.push(z_i);
            bulk_pi_over_peq.push(z_i * p_mod / p_eq - 1.0);
        }

        // The pressure ratio must grow strictly with lambda for the
        // inversion to be single-valued.
        for w in bulk_pi_over_peq.windows(2) {
            if w[1] <= w[0] {
                return Err(format!(
                    "Jonah bulkPi/Peq table is not monotonic near {}",
                    w[0]
                )
                .into());
            }
        }

        let bulk_pi_over_peq_max = *bulk_pi_over_peq.last().unwrap();
        let lambda_squared_spline =
            CubicSpline::new(bulk_pi_over_peq.clone(), lambda_scale_squared.clone())?;
        let z_spline = CubicSpline::new(bulk_pi_over_peq.clone(), z.clone())?;

        Ok(JonahTable {
            lambda_scale_squared,
            z,
            bulk_pi_over_peq,
            bulk_pi_over_peq_max,
            lambda_squared_spline,
            z_spline,
        })
    }

    /// Invert the table at a given `bulkPi / P_eq`, returning
    /// `(lambda_scale_squared, z)`.
    ///
    /// Above [`JonahTable::bulk_pi_over_peq_max`] the lambda root does not
    /// exist and the query is a domain error; below the tabulated minimum
    /// (which sits at the physical bound `bulkPi = -P_eq`) the result clamps
    /// to the first entry.
    pub fn coefficients(&self, bulk_pi_over_peq: f64) -> Result<(f64, f64), Box<dyn Error>> {
        if bulk_pi_over_peq > self.bulk_pi_over_peq_max {
            return Err(format!(
                "bulkPi/Peq = {} exceeds the tabulated maximum {}",
                bulk_pi_over_peq, self.bulk_pi_over_peq_max
            )
            .into());
        }
        Ok((
            self.lambda_squared_spline.eval(bulk_pi_over_peq),
            self.z_spline.eval(bulk_pi_over_peq),
        ))
    }
}
