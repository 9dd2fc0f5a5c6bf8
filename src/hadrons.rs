// Hadron resonance records consumed by the Jonah coefficient solver

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// The slice of a hadron-resonance-gas particle record the coefficient
/// machinery needs: mass, spin/isospin degeneracy and net baryon number.
///
/// Quantum statistics follow from the baryon number: baryons are fermions,
/// mesons are bosons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hadron {
    pub name: String,
    /// Mass in GeV.
    pub mass: f64,
    /// Spin degeneracy factor g.
    pub degeneracy: f64,
    /// Net baryon number (-1, 0, +1 for the resonance-gas species).
    pub baryon: i32,
}

impl Hadron {
    pub fn new(name: &str, mass: f64, degeneracy: f64, baryon: i32) -> Self {
        Hadron {
            name: name.to_string(),
            mass,
            degeneracy,
            baryon,
        }
    }

    /// Quantum-statistics sign in the equilibrium distribution denominator:
    /// +1 for fermions (baryons), -1 for bosons (mesons).
    pub fn quantum_sign(&self) -> f64 {
        if self.baryon != 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Load a hadron list from a JSON array of records.
pub fn load_hadrons_json(path: &Path) -> Result<Vec<Hadron>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hadron list '{}': {}", path.display(), e))?;
    let hadrons: Vec<Hadron> = serde_json::from_str(&contents)
        .map_err(|e| format!("Malformed hadron list '{}': {}", path.display(), e))?;
    if hadrons.is_empty() {
        return Err(format!("Hadron list '{}' is empty", path.display()).into());
    }
    Ok(hadrons)
}
