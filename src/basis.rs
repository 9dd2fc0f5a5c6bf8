// Local-rest-frame tetrad construction from the fluid four-velocity

use crate::four_velocity::FourVelocity;

/// Transverse flow below this magnitude is treated as zero, with the basis
/// falling back to the lab transverse axes to avoid 0/0 in `ux / u_perp`.
pub const TRANSVERSE_FLOW_CUTOFF: f64 = 1.0e-5;

/// Orthonormal spatial basis `{X, Y, Z}` of a fluid cell's local rest frame,
/// expressed in lab (Milne) coordinates.
///
/// Together with the flow velocity `u` these form a tetrad: `X` points along
/// the boosted transverse-flow direction, `Y` is purely transverse and
/// orthogonal to the flow in the transverse plane, `Z` is the boosted
/// longitudinal direction. `Y` has no time or eta component, and `Z` has no
/// transverse components, so only the listed entries are stored.
#[derive(Debug, Clone, Copy)]
pub struct MilneBasis {
    pub xt: f64,
    pub xx: f64,
    pub xy: f64,
    pub xn: f64,
    pub yx: f64,
    pub yy: f64,
    pub zt: f64,
    pub zn: f64,
}

impl MilneBasis {
    /// Construct the tetrad for a cell with flow velocity `u`.
    ///
    /// The longitudinal boost angle is `sinhL = tau u^eta / u_t_perp`,
    /// `coshL = u^tau / u_t_perp`. For `u_perp` below
    /// [`TRANSVERSE_FLOW_CUTOFF`] the transverse axes default to the lab
    /// axes; the X/Z time and eta components are continuous through that
    /// limit (they vanish with `u_perp` and `sinhL` respectively).
    pub fn new(u: &FourVelocity) -> Self {
        let sinh_l = u.tau * u.un / u.u_t_perp;
        let cosh_l = u.ut / u.u_t_perp;

        let xt = u.u_perp * cosh_l;
        let xn = u.u_perp * sinh_l / u.tau;
        let zt = sinh_l;
        let zn = cosh_l / u.tau;

        let (xx, xy, yx, yy) = if u.u_perp > TRANSVERSE_FLOW_CUTOFF {
            (
                u.u_t_perp * u.ux / u.u_perp,
                u.u_t_perp * u.uy / u.u_perp,
                -u.uy / u.u_perp,
                u.ux / u.u_perp,
            )
        } else {
            (1.0, 0.0, 0.0, 1.0)
        };

        MilneBasis {
            xt,
            xx,
            xy,
            xn,
            yx,
            yy,
            zt,
            zn,
        }
    }
}
