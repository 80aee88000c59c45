//! # Statics Calculations
//!
//! The three stages of a simply-supported beam analysis, leaf-first:
//!
//! - [`reactions`] - Support reactions from global equilibrium
//! - [`internal_forces`] - Shear and moment at any section
//! - [`diagram`] - Evenly spaced sampling for SFD/BMD plots
//!
//! Each stage is a pure function of the [`LoadSet`](crate::loads::LoadSet)
//! and the output of the stage before it. [`Beam`](crate::Beam) wires them
//! together and caches the reactions.

pub mod diagram;
pub mod internal_forces;
pub mod reactions;

// Re-export commonly used types
pub use diagram::{Diagram, DiagramPoint, DiagramSampler, Extremes, Samples, DEFAULT_SAMPLE_COUNT};
pub use internal_forces::InternalForces;
pub use reactions::{compute_reactions, Reactions};
