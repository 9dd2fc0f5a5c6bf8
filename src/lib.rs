// Viscous delta-f corrections for Monte Carlo particle sampling at a
// heavy-ion freezeout hypersurface: local-rest-frame tetrads, tensor boosts,
// correction-coefficient tables and the momentum-rescaling transform.

pub mod basis;
pub mod deltaf;
pub mod diffusion;
pub mod four_velocity;
pub mod hadrons;
pub mod jonah;
pub mod params;
pub mod quadrature;
pub mod rescale;
pub mod shear;
pub mod spline;
pub mod surface_element;
pub mod table;

pub use basis::MilneBasis;
pub use deltaf::{DeltafCoefficients, DeltafData, DfMode, TransportModel};
pub use diffusion::{BaryonDiffusion, BaryonDiffusionLrf};
pub use four_velocity::FourVelocity;
pub use hadrons::Hadron;
pub use jonah::JonahTable;
pub use params::ParameterSet;
pub use rescale::{rescale_momentum, LrfMomentum};
pub use shear::{ShearTensor, ShearTensorLrf};
pub use surface_element::{SurfaceElement, SurfaceElementLrf};
