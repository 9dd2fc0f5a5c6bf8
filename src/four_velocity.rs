// Fluid four-velocity of a freezeout cell in Milne coordinates

/// Four-velocity `u = (u^tau, u^x, u^y, u^eta)` of a fluid cell, together
/// with its transverse/longitudinal decomposition and the proper time of the
/// cell.
///
/// The normalization `u.u = 1` (metric `diag(1, -1, -1, -tau^2)`) is a
/// documented precondition of every boost operation; it is not re-validated
/// here because hydrodynamic output provides normalized velocities.
#[derive(Debug, Clone, Copy)]
pub struct FourVelocity {
    pub ut: f64,
    pub ux: f64,
    pub uy: f64,
    pub un: f64,
    /// Transverse flow magnitude `sqrt(ux^2 + uy^2)`.
    pub u_perp: f64,
    /// Longitudinal-boost magnitude `sqrt(ut^2 - tau^2 un^2)`.
    pub u_t_perp: f64,
    /// Proper time of the cell.
    pub tau: f64,
}

impl FourVelocity {
    /// Build from raw Milne components as written by the hydro code.
    pub fn new(ut: f64, ux: f64, uy: f64, un: f64, tau: f64) -> Self {
        let u_perp = (ux * ux + uy * uy).sqrt();
        let u_t_perp = (ut * ut - tau * tau * un * un).sqrt();
        FourVelocity {
            ut,
            ux,
            uy,
            un,
            u_perp,
            u_t_perp,
            tau,
        }
    }

    /// Build a normalized four-velocity from spatial components only,
    /// solving `u.u = 1` for the time component.
    pub fn from_spatial(ux: f64, uy: f64, un: f64, tau: f64) -> Self {
        let ut = (1.0 + ux * ux + uy * uy + tau * tau * un * un).sqrt();
        Self::new(ut, ux, uy, un, tau)
    }

    /// Minkowski norm `u.u` in Milne coordinates (1 for a valid flow velocity).
    pub fn norm_squared(&self) -> f64 {
        self.ut * self.ut
            - self.ux * self.ux
            - self.uy * self.uy
            - self.tau * self.tau * self.un * self.un
    }
}
