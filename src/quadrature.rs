// Gauss-Laguerre quadrature for thermal momentum integrals

use once_cell::sync::Lazy;

/// The 32-point rule used by the Jonah coefficient solver; built once on
/// first use.
pub static GAUSS_LAGUERRE_32: Lazy<GaussLaguerre> = Lazy::new(|| GaussLaguerre::new(32));

/// An n-point Gauss-Laguerre rule: nodes and weights for
/// `int_0^inf e^{-x} f(x) dx ~= sum_i w_i f(x_i)`.
///
/// Thermal integrands carry their own `e^{-E}` falloff from the equilibrium
/// distribution, so [`GaussLaguerre::integrate`] folds the `e^{x_i}` factor
/// back in and approximates the plain integral `int_0^inf g(x) dx` for
/// exponentially decaying `g`.
#[derive(Debug, Clone)]
pub struct GaussLaguerre {
    pub nodes: Vec<f64>,
    pub weights: Vec<f64>,
    scaled_weights: Vec<f64>,
}

impl GaussLaguerre {
    /// Compute the rule by Newton iteration on the Laguerre recurrence.
    pub fn new(n: usize) -> Self {
        assert!(n >= 2, "Gauss-Laguerre rule needs at least two points");
        let nf = n as f64;
        let mut nodes = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);

        for i in 0..n {
            // Initial guesses for the i-th root (ascending), then refine
            let mut z = match i {
                0 => 3.0 / (1.0 + 2.4 * nf),
                1 => nodes[0] + 15.0 / (1.0 + 2.5 * nf),
                _ => {
                    let ai = (i - 1) as f64;
                    nodes[i - 1]
                        + ((1.0 + 2.55 * ai) / (1.9 * ai)) * (nodes[i - 1] - nodes[i - 2])
                }
            };

            let mut p2 = 0.0;
            let mut pp = 0.0;
            for _ in 0..100 {
                // Laguerre recurrence L_j at z
                let mut p1 = 1.0;
                p2 = 0.0;
                for j in 1..=n {
                    let jf = j as f64;
                    let p3 = p2;
                    p2 = p1;
                    p1 = ((2.0 * jf - 1.0 - z) * p2 - (jf - 1.0) * p3) / jf;
                }
                pp = nf * (p1 - p2) / z;
                let z_old = z;
                z = z_old - p1 / pp;
                if (z - z_old).abs() <= 1e-14 * z.abs().max(1.0) {
                    break;
                }
            }

            nodes.push(z);
            weights.push(-1.0 / (pp * nf * p2));
        }

        let scaled_weights = nodes
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| w * x.exp())
            .collect();

        GaussLaguerre {
            nodes,
            weights,
            scaled_weights,
        }
    }

    /// Approximate `int_0^inf g(x) dx` for exponentially decaying `g`.
    pub fn integrate(&self, g: impl Fn(f64) -> f64) -> f64 {
        self.nodes
            .iter()
            .zip(self.scaled_weights.iter())
            .map(|(x, sw)| sw * g(*x))
            .sum()
    }
}

/// Equilibrium occupation `1 / (e^{e_bar} + sign)` with `sign` +1 for
/// fermions and -1 for bosons; energies in units of the temperature.
pub fn equilibrium_distribution(e_bar: f64, sign: f64) -> f64 {
    1.0 / (e_bar.exp() + sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laguerre_moments() {
        // int_0^inf x^k e^{-x} dx = k!
        let rule = GaussLaguerre::new(16);
        let factorials = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0];
        for (k, expect) in factorials.iter().enumerate() {
            let got = rule.integrate(|x| x.powi(k as i32) * (-x).exp());
            assert!(
                (got - expect).abs() / expect < 1e-10,
                "moment {}: got {}, expected {}",
                k,
                got,
                expect
            );
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        // Weights integrate e^{-x} itself: sum w_i = 1
        let rule = GaussLaguerre::new(32);
        let sum: f64 = rule.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nodes_ascending_and_positive() {
        let rule = GaussLaguerre::new(32);
        assert!(rule.nodes[0] > 0.0);
        for w in rule.nodes.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_massless_boson_density_integral() {
        // int_0^inf q^2 / (e^q - 1) dq = 2 zeta(3)
        let rule = GaussLaguerre::new(32);
        let got = rule.integrate(|q| q * q * equilibrium_distribution(q, -1.0));
        let expect = 2.0 * 1.2020569031595943;
        assert!((got - expect).abs() < 1e-6, "got {}", got);
    }

    #[test]
    fn test_global_rule_is_32_point() {
        assert_eq!(GAUSS_LAGUERRE_32.nodes.len(), 32);
    }
}
