// Delta-f correction coefficient tables and their thermodynamic lookup

use crate::hadrons::Hadron;
use crate::jonah::JonahTable;
use crate::params::ParameterSet;
use crate::spline::CubicSpline;
use crate::table::CoefficientTable;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Hadronic transport model whose equation of state the coefficient tables
/// were computed for; selects the table subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportModel {
    Urqmd,
    Smash,
    SmashBox,
}

impl TransportModel {
    /// Map the `hrg_eos` parameter to a model.
    pub fn from_id(id: i32) -> Result<Self, Box<dyn Error>> {
        match id {
            1 => Ok(TransportModel::Urqmd),
            2 => Ok(TransportModel::Smash),
            3 => Ok(TransportModel::SmashBox),
            other => Err(format!("Unknown hrg_eos = {} (expected 1, 2 or 3)", other).into()),
        }
    }

    /// Table directory relative to the coefficient root.
    pub fn table_subdir(&self) -> &'static str {
        match self {
            TransportModel::Urqmd => "deltaf_coefficients/vh/urqmd",
            TransportModel::Smash => "deltaf_coefficients/vh/smash",
            TransportModel::SmashBox => "deltaf_coefficients/vh/smash_box",
        }
    }
}

/// Delta-f correction scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfMode {
    /// 14-moment approximation (linear in bulk/shear/diffusion).
    FourteenMoment,
    /// Chapman-Enskog expansion; also used by the modified-equilibrium
    /// scheme built on the same coefficients.
    ChapmanEnskog,
    /// Jonah momentum-rescaling scheme (nonlinear in bulkPi).
    ModifiedJonah,
}

impl DfMode {
    /// Map the `df_mode` parameter: 1 = 14-moment, 2 = Chapman-Enskog,
    /// 3 = modified equilibrium (Chapman-Enskog coefficients), 4 = Jonah.
    pub fn from_id(id: i32) -> Result<Self, Box<dyn Error>> {
        match id {
            1 => Ok(DfMode::FourteenMoment),
            2 | 3 => Ok(DfMode::ChapmanEnskog),
            4 => Ok(DfMode::ModifiedJonah),
            other => Err(format!("Unknown df_mode = {} (expected 1..4)", other).into()),
        }
    }
}

/// Coefficient set returned by a thermodynamic-state query, one variant per
/// correction scheme.
#[derive(Debug, Clone, Copy)]
pub enum DeltafCoefficients {
    FourteenMoment {
        c0: f64,
        c1: f64,
        c2: f64,
        c3: f64,
        c4: f64,
    },
    ChapmanEnskog {
        f: f64,
        g: f64,
        betabulk: f64,
        betav: f64,
        betapi: f64,
    },
    Jonah {
        lambda_scale_squared: f64,
        z: f64,
    },
}

#[derive(Debug)]
struct Tables14 {
    c0: CoefficientTable,
    c1: CoefficientTable,
    c2: CoefficientTable,
    c3: CoefficientTable,
    c4: CoefficientTable,
}

#[derive(Debug)]
struct TablesCe {
    f: CoefficientTable,
    g: CoefficientTable,
    betabulk: CoefficientTable,
    betav: CoefficientTable,
    betapi: CoefficientTable,
}

// With baryon tracking the full (T, muB) grids are interpolated bilinearly;
// without it only the muB = 0 slice is needed and the baryon-coupled
// coefficients drop out, so 1-D splines in T suffice.
#[derive(Debug)]
enum CoefficientSource {
    Bilinear14(Tables14),
    BilinearCe(TablesCe),
    Spline14 { c0: CubicSpline, c2: CubicSpline },
    SplineCe {
        f: CubicSpline,
        betabulk: CubicSpline,
        betapi: CubicSpline,
    },
    Jonah(JonahTable),
}

/// Owner of the delta-f coefficient tables: loaded once at initialization,
/// queried read-only per freezeout cell.
#[derive(Debug)]
pub struct DeltafData {
    pub df_mode: DfMode,
    pub include_baryon: bool,
    pub transport_model: Option<TransportModel>,
    source: CoefficientSource,
}

fn load_table(dir: &Path, name: &str) -> Result<CoefficientTable, Box<dyn Error>> {
    CoefficientTable::from_file(&dir.join(name))
}

fn mub0_spline(table: &CoefficientTable) -> Result<CubicSpline, Box<dyn Error>> {
    CubicSpline::new(table.t_grid(), table.mub0_slice().to_vec())
}

impl DeltafData {
    /// Load the coefficient set selected by the parameter switches.
    ///
    /// `table_root` is the directory holding `deltaf_coefficients/`, and
    /// `hadrons` is the resonance list (consumed only by the Jonah solve).
    /// Missing or malformed table files fail the construction; no physics
    /// can proceed without coefficients.
    pub fn from_params(
        params: &ParameterSet,
        table_root: &Path,
        hadrons: &[Hadron],
    ) -> Result<Self, Box<dyn Error>> {
        // mode 1 = viscous hydro surface; anisotropic-hydro surfaces carry
        // no coefficient tables here
        let mode = params.get_val("mode")? as i32;
        if mode != 1 {
            return Err(format!(
                "Freezeout surface mode {} has no delta-f coefficient tables (only viscous hydro, mode 1)",
                mode
            )
            .into());
        }

        let df_mode = DfMode::from_id(params.get_val("df_mode")? as i32)?;
        let include_baryon = params.exist("include_baryon") && params.get_val("include_baryon")? != 0.0;

        if df_mode == DfMode::ModifiedJonah {
            return Ok(DeltafData {
                df_mode,
                include_baryon,
                transport_model: None,
                source: CoefficientSource::Jonah(JonahTable::compute(hadrons)?),
            });
        }

        let transport_model = TransportModel::from_id(params.get_val("hrg_eos")? as i32)?;
        let dir: PathBuf = table_root.join(transport_model.table_subdir());

        let source = match (df_mode, include_baryon) {
            (DfMode::FourteenMoment, true) => CoefficientSource::Bilinear14(Tables14 {
                c0: load_table(&dir, "c0.dat")?,
                c1: load_table(&dir, "c1.dat")?,
                c2: load_table(&dir, "c2.dat")?,
                c3: load_table(&dir, "c3.dat")?,
                c4: load_table(&dir, "c4.dat")?,
            }),
            (DfMode::FourteenMoment, false) => {
                let c0 = load_table(&dir, "c0.dat")?;
                let c2 = load_table(&dir, "c2.dat")?;
                CoefficientSource::Spline14 {
                    c0: mub0_spline(&c0)?,
                    c2: mub0_spline(&c2)?,
                }
            }
            (DfMode::ChapmanEnskog, true) => CoefficientSource::BilinearCe(TablesCe {
                f: load_table(&dir, "F.dat")?,
                g: load_table(&dir, "G.dat")?,
                betabulk: load_table(&dir, "betabulk.dat")?,
                betav: load_table(&dir, "betaV.dat")?,
                betapi: load_table(&dir, "betapi.dat")?,
            }),
            (DfMode::ChapmanEnskog, false) => {
                let f = load_table(&dir, "F.dat")?;
                let betabulk = load_table(&dir, "betabulk.dat")?;
                let betapi = load_table(&dir, "betapi.dat")?;
                CoefficientSource::SplineCe {
                    f: mub0_spline(&f)?,
                    betabulk: mub0_spline(&betabulk)?,
                    betapi: mub0_spline(&betapi)?,
                }
            }
            (DfMode::ModifiedJonah, _) => unreachable!(),
        };

        Ok(DeltafData {
            df_mode,
            include_baryon,
            transport_model: Some(transport_model),
            source,
        })
    }

    /// Coefficients at a thermodynamic state.
    ///
    /// `t` and `mub` address the tables; `e`, `p` and `bulk_pi` feed the
    /// Jonah inversion (`bulkPi / P_eq`). The linear modes never fail:
    /// out-of-grid `(T, muB)` clamps to the table edges. The Jonah mode
    /// reports a domain error when `bulkPi / P_eq` exceeds the tabulated
    /// maximum, so callers should compare against
    /// [`DeltafData::bulk_pi_over_peq_max`] first.
    #[allow(unused_variables)]
    pub fn evaluate_df_coefficients(
        &self,
        t: f64,
        mub: f64,
        e: f64,
        p: f64,
        bulk_pi: f64,
    ) -> Result<DeltafCoefficients, Box<dyn Error>> {
        match &self.source {
            CoefficientSource::Bilinear14(tables) => Ok(DeltafCoefficients::FourteenMoment {
                c0: tables.c0.bilinear(t, mub),
                c1: tables.c1.bilinear(t, mub),
                c2: tables.c2.bilinear(t, mub),
                c3: tables.c3.bilinear(t, mub),
                c4: tables.c4.bilinear(t, mub),
            }),
            CoefficientSource::Spline14 { c0, c2 } => Ok(DeltafCoefficients::FourteenMoment {
                c0: c0.eval(t),
                c1: 0.0,
                c2: c2.eval(t),
                c3: 0.0,
                c4: 0.0,
            }),
            CoefficientSource::BilinearCe(tables) => Ok(DeltafCoefficients::ChapmanEnskog {
                f: tables.f.bilinear(t, mub),
                g: tables.g.bilinear(t, mub),
                betabulk: tables.betabulk.bilinear(t, mub),
                betav: tables.betav.bilinear(t, mub),
                betapi: tables.betapi.bilinear(t, mub),
            }),
            // G and the baryon-diffusion couplings vanish at muB = 0;
            // betaV is set to 1 because it only ever divides.
            CoefficientSource::SplineCe { f, betabulk, betapi } => {
                Ok(DeltafCoefficients::ChapmanEnskog {
                    f: f.eval(t),
                    g: 0.0,
                    betabulk: betabulk.eval(t),
                    betav: 1.0,
                    betapi: betapi.eval(t),
                })
            }
            CoefficientSource::Jonah(table) => {
                let (lambda_scale_squared, z) = table.coefficients(bulk_pi / p)?;
                Ok(DeltafCoefficients::Jonah {
                    lambda_scale_squared,
                    z,
                })
            }
        }
    }

    /// Upper edge of the Jonah inversion domain, `None` for the linear
    /// modes.
    pub fn bulk_pi_over_peq_max(&self) -> Option<f64> {
        match &self.source {
            CoefficientSource::Jonah(table) => Some(table.bulk_pi_over_peq_max),
            _ => None,
        }
    }
}
