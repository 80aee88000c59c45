//! Simply-Supported Beam
//!
//! [`Beam`] is the aggregate the rest of the system talks to. It owns the
//! validated [`LoadSet`] and a cache of the solved support reactions.
//!
//! ## Reaction Cache
//!
//! Reactions are solved on demand the first time an evaluation needs them
//! and reused until the loads change. Adding or removing a load drops the
//! cache, so an evaluation never sees reactions from an older load set.
//!
//! ## Example
//! ```rust
//! use beam_core::Beam;
//!
//! // 15 m beam, negative magnitudes act upward
//! let mut beam = Beam::new(15.0, "Beam A")?;
//! beam.add_point_load(5.0, -10.0)?;
//! beam.add_point_load(12.0, -6.0)?;
//! beam.add_udl(7.0, 14.0, -2.0)?;
//!
//! let reactions = beam.compute_reactions();
//! assert!((reactions.right - (-269.0 / 15.0)).abs() < 1e-9);
//! assert_eq!(beam.shear_at(0.0)?, reactions.left);
//! assert!(beam.bending_moment_at(15.0)?.abs() < 1e-9);
//!
//! let points = beam.sample(500)?;
//! assert_eq!(points.len(), 500);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::diagram::{Diagram, DiagramPoint, DiagramSampler, Samples};
use crate::calculations::internal_forces::InternalForces;
use crate::calculations::reactions::{compute_reactions, Reactions};
use crate::errors::{BeamError, BeamResult};
use crate::loads::{LoadId, LoadSet, PointLoad, PointLoadInput, UdlInput, UniformLoad};

/// Name given to beams whose definition does not provide one
pub const DEFAULT_BEAM_NAME: &str = "default_beam";

fn default_beam_name() -> String {
    DEFAULT_BEAM_NAME.to_string()
}

// ============================================================================
// Beam
// ============================================================================

/// A straight, simply-supported beam with its loads.
///
/// Serializes through [`BeamInput`], so deserialized beams are validated the
/// same way as beams built in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BeamInput", into = "BeamInput")]
pub struct Beam {
    name: String,
    loads: LoadSet,
    reactions: OnceCell<Reactions>,
}

impl Beam {
    /// Create an unloaded beam.
    ///
    /// Fails with `ZeroOrNegativeLength` unless `length > 0`.
    pub fn new(length: f64, name: impl Into<String>) -> BeamResult<Self> {
        Ok(Self {
            name: name.into(),
            loads: LoadSet::new(length)?,
            reactions: OnceCell::new(),
        })
    }

    /// User label for this beam
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span length
    pub fn length(&self) -> f64 {
        self.loads.span()
    }

    /// The validated loads
    pub fn loads(&self) -> &LoadSet {
        &self.loads
    }

    /// Point loads in insertion order
    pub fn point_loads(&self) -> &[PointLoad] {
        self.loads.point_loads()
    }

    /// UDLs in insertion order
    pub fn udls(&self) -> &[UniformLoad] {
        self.loads.udls()
    }

    fn invalidate(&mut self) {
        if self.reactions.take().is_some() {
            debug!(beam = %self.name, "cached reactions invalidated");
        }
    }

    /// Add a point load (positive magnitude acts downward)
    pub fn add_point_load(&mut self, position: f64, magnitude: f64) -> BeamResult<LoadId> {
        let id = self.loads.add_point_load(position, magnitude)?;
        self.invalidate();
        Ok(id)
    }

    /// Add a UDL over `[start, end]` (positive intensity acts downward)
    pub fn add_udl(&mut self, start: f64, end: f64, intensity: f64) -> BeamResult<LoadId> {
        let id = self.loads.add_udl(start, end, intensity)?;
        self.invalidate();
        Ok(id)
    }

    /// Add a point load collected by an input layer
    pub fn add_point_load_input(&mut self, input: PointLoadInput) -> BeamResult<LoadId> {
        self.add_point_load(input.position, input.magnitude)
    }

    /// Add a UDL collected by an input layer
    pub fn add_udl_input(&mut self, input: UdlInput) -> BeamResult<LoadId> {
        self.add_udl(input.start, input.end, input.intensity)
    }

    /// Remove a point load by id
    pub fn remove_point_load(&mut self, id: LoadId) -> Option<PointLoad> {
        let removed = self.loads.remove_point_load(id)?;
        self.invalidate();
        Some(removed)
    }

    /// Remove a UDL by id
    pub fn remove_udl(&mut self, id: LoadId) -> Option<UniformLoad> {
        let removed = self.loads.remove_udl(id)?;
        self.invalidate();
        Some(removed)
    }

    /// Solve the support reactions and store them in the cache.
    ///
    /// Always recomputes; for unchanged loads the result is bit-identical.
    pub fn compute_reactions(&mut self) -> Reactions {
        let reactions = compute_reactions(&self.loads);
        self.reactions = OnceCell::with_value(reactions);
        reactions
    }

    /// Cached reactions, solving them first if needed
    pub fn reactions(&self) -> Reactions {
        *self.reactions.get_or_init(|| compute_reactions(&self.loads))
    }

    /// Cached reactions without solving
    pub fn cached_reactions(&self) -> Option<Reactions> {
        self.reactions.get().copied()
    }

    /// Internal force evaluator, solving reactions on demand
    pub fn forces(&self) -> InternalForces<'_> {
        InternalForces::new(&self.loads, self.reactions())
    }

    fn sampler(&self) -> DiagramSampler<'_> {
        DiagramSampler::new(self.forces())
    }

    /// Shear force at `x` in `[0, length]`
    pub fn shear_at(&self, x: f64) -> BeamResult<f64> {
        self.forces().shear_at(x)
    }

    /// Bending moment at `x` in `[0, length]`
    pub fn bending_moment_at(&self, x: f64) -> BeamResult<f64> {
        self.forces().bending_moment_at(x)
    }

    /// `n >= 2` evenly spaced `(x, V, M)` points from 0 to `length` inclusive
    pub fn sample(&self, n: usize) -> BeamResult<Vec<DiagramPoint>> {
        self.sampler().sample(n)
    }

    /// Lazy, restartable version of [`Beam::sample`]
    pub fn samples(&self, n: usize) -> BeamResult<Samples<'_>> {
        self.sampler().samples(n)
    }

    /// Points at caller-supplied positions, in the order given
    pub fn sample_at(&self, positions: &[f64]) -> BeamResult<Vec<DiagramPoint>> {
        self.sampler().sample_at(positions)
    }

    /// Supports, load positions and UDL bounds, sorted
    pub fn critical_positions(&self) -> Vec<f64> {
        self.loads.critical_positions()
    }

    /// Sample `n` points and bundle them with the beam's name and reactions
    pub fn diagram(&self, n: usize) -> BeamResult<Diagram> {
        Ok(Diagram {
            name: self.name.clone(),
            length: self.length(),
            reactions: self.reactions(),
            points: self.sample(n)?,
        })
    }

    /// Input form of this beam (loads without ids)
    pub fn to_input(&self) -> BeamInput {
        BeamInput {
            name: self.name.clone(),
            length: self.length(),
            point_loads: self.point_loads().iter().map(PointLoad::to_input).collect(),
            udls: self.udls().iter().map(UniformLoad::to_input).collect(),
        }
    }
}

// ============================================================================
// Beam Input
// ============================================================================

/// Beam definition as supplied by an input layer or a JSON file.
///
/// # Example
/// ```rust
/// use beam_core::BeamInput;
///
/// let json = r#"{
///     "name": "B-2",
///     "length": 10.0,
///     "point_loads": [{ "position": 3.0, "magnitude": 1000.0 }]
/// }"#;
/// let beam = serde_json::from_str::<BeamInput>(json)?.build()?;
/// assert_eq!(beam.point_loads().len(), 1);
/// assert!(beam.udls().is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label
    #[serde(default = "default_beam_name")]
    pub name: String,

    /// Span length
    pub length: f64,

    #[serde(default)]
    pub point_loads: Vec<PointLoadInput>,

    #[serde(default)]
    pub udls: Vec<UdlInput>,
}

impl BeamInput {
    /// Create an unloaded beam definition
    pub fn new(name: impl Into<String>, length: f64) -> Self {
        Self {
            name: name.into(),
            length,
            point_loads: Vec::new(),
            udls: Vec::new(),
        }
    }

    /// Add a point load and return self (builder pattern)
    pub fn with_point_load(mut self, position: f64, magnitude: f64) -> Self {
        self.point_loads.push(PointLoadInput {
            position,
            magnitude,
        });
        self
    }

    /// Add a UDL and return self (builder pattern)
    pub fn with_udl(mut self, start: f64, end: f64, intensity: f64) -> Self {
        self.udls.push(UdlInput {
            start,
            end,
            intensity,
        });
        self
    }

    /// Validate every load and build the beam.
    ///
    /// Stops at the first invalid load.
    pub fn build(&self) -> BeamResult<Beam> {
        let mut beam = Beam::new(self.length, self.name.clone())?;
        for load in &self.point_loads {
            beam.add_point_load_input(*load)?;
        }
        for udl in &self.udls {
            beam.add_udl_input(*udl)?;
        }
        Ok(beam)
    }
}

impl TryFrom<BeamInput> for Beam {
    type Error = BeamError;

    fn try_from(input: BeamInput) -> BeamResult<Self> {
        input.build()
    }
}

impl From<Beam> for BeamInput {
    fn from(beam: Beam) -> Self {
        beam.to_input()
    }
}

// ============================================================================
// Tests
// ============================================================================
