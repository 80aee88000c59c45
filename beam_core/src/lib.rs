//! # beam_core - Simply-Supported Beam Statics Engine
//!
//! `beam_core` computes support reactions, shear force and bending moment for
//! a straight, simply-supported beam carrying point loads and uniformly
//! distributed loads (UDLs), and samples them for shear force and bending
//! moment diagrams (SFD/BMD).
//!
//! ## Design Philosophy
//!
//! - **Closed form**: Reactions from equilibrium, internal forces from exact
//!   piecewise integrals of the load distribution
//! - **Validated on entry**: Loads are checked as they are added, so a
//!   [`Beam`] never holds a load that lies off its span
//! - **JSON-Friendly**: Inputs, diagrams and errors implement Serialize/Deserialize
//! - **No I/O**: Rendering, files and prompts belong to the caller
//!
//! ## Sign Convention
//!
//! - Positive load magnitude / intensity: acts downward
//! - Positive reaction: acts upward
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::Beam;
//!
//! // 10 ft beam, 1000 lb at midspan plus 100 plf over the full span
//! let mut beam = Beam::new(10.0, "B-1")?;
//! beam.add_point_load(5.0, 1000.0)?;
//! beam.add_udl(0.0, 10.0, 100.0)?;
//!
//! let reactions = beam.reactions();
//! assert!((reactions.left - 1000.0).abs() < 1e-9);
//!
//! // M = PL/4 + wL²/8 = 2500 + 1250
//! assert!((beam.bending_moment_at(5.0)? - 3750.0).abs() < 1e-9);
//!
//! let diagram = beam.diagram(101)?;
//! assert_eq!(diagram.points.len(), 101);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - The beam aggregate and its serializable input form
//! - [`loads`] - Point loads, UDLs and the validated load set
//! - [`calculations`] - Reactions, internal forces and diagram sampling
//! - [`errors`] - Structured error types

pub mod beam;
pub mod calculations;
pub mod errors;
pub mod loads;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, BeamInput, DEFAULT_BEAM_NAME};
pub use calculations::{Diagram, DiagramPoint, Extremes, Reactions, DEFAULT_SAMPLE_COUNT};
pub use errors::{BeamError, BeamResult};
pub use loads::{LoadId, LoadSet, PointLoad, PointLoadInput, UdlInput, UniformLoad};
