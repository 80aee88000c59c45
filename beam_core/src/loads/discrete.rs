//! Discrete Load Records
//!
//! Typed records for the two load patterns a simply-supported beam carries:
//! concentrated point loads and uniformly distributed loads (UDLs).
//!
//! Each record knows its own resultant, its moment about an arbitrary pivot,
//! and how much shear and moment it has removed by the time a section at `x`
//! is reached (measured from the left support). The evaluator superposes
//! these contributions.
//!
//! ## Sign Convention
//! - Positive magnitude / intensity: load acts downward
//! - A passed load subtracts from shear and moment

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to each load when it is added to a beam
pub type LoadId = Uuid;

// ============================================================================
// Point Load
// ============================================================================

/// A concentrated load at a single position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Unique identifier (for removal and UI row management)
    pub id: LoadId,
    /// Distance from the left support
    pub position: f64,
    /// Load magnitude, positive downward
    pub magnitude: f64,
}

impl PointLoad {
    pub(crate) fn new(position: f64, magnitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            magnitude,
        }
    }

    /// Moment of this load about `pivot` (positive for a downward load right of the pivot)
    pub fn moment_about(&self, pivot: f64) -> f64 {
        self.magnitude * (self.position - pivot)
    }

    /// Shear removed by this load at a section `x` from the left support.
    ///
    /// A load sitting exactly at `x` counts as passed.
    pub fn shear_drop_at(&self, x: f64) -> f64 {
        if x >= self.position {
            self.magnitude
        } else {
            0.0
        }
    }

    /// Moment removed by this load at a section `x` from the left support
    pub fn moment_drop_at(&self, x: f64) -> f64 {
        if x >= self.position {
            self.magnitude * (x - self.position)
        } else {
            0.0
        }
    }

    /// The input form of this load
    pub fn to_input(&self) -> PointLoadInput {
        PointLoadInput {
            position: self.position,
            magnitude: self.magnitude,
        }
    }
}

// ============================================================================
// Uniformly Distributed Load
// ============================================================================

/// A load of constant intensity over `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformLoad {
    /// Unique identifier (for removal and UI row management)
    pub id: LoadId,
    /// Start position from the left support
    pub start: f64,
    /// End position from the left support (always greater than `start`)
    pub end: f64,
    /// Load per unit length, positive downward
    pub intensity: f64,
}

impl UniformLoad {
    pub(crate) fn new(start: f64, end: f64, intensity: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            intensity,
        }
    }

    /// Loaded length
    pub fn extent(&self) -> f64 {
        self.end - self.start
    }

    /// Total force, W = w(b-a)
    pub fn resultant(&self) -> f64 {
        self.intensity * self.extent()
    }

    /// Point where the resultant acts, c = (a+b)/2
    pub fn centroid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Moment of the resultant about `pivot`
    pub fn moment_about(&self, pivot: f64) -> f64 {
        self.resultant() * (self.centroid() - pivot)
    }

    /// Shear removed by this load at a section `x` from the left support
    pub fn shear_drop_at(&self, x: f64) -> f64 {
        if x < self.start {
            0.0
        } else if x <= self.end {
            // Within the load: w(x-a)
            self.intensity * (x - self.start)
        } else {
            self.resultant()
        }
    }

    /// Moment removed by this load at a section `x` from the left support
    pub fn moment_drop_at(&self, x: f64) -> f64 {
        if x < self.start {
            0.0
        } else if x <= self.end {
            // Within the load: w(x-a)²/2
            let a = x - self.start;
            self.intensity * a * a / 2.0
        } else {
            // Past the load: W(x-c)
            self.resultant() * (x - self.centroid())
        }
    }

    /// The input form of this load
    pub fn to_input(&self) -> UdlInput {
        UdlInput {
            start: self.start,
            end: self.end,
            intensity: self.intensity,
        }
    }
}

// ============================================================================
// Load Inputs
// ============================================================================

/// A point load as collected from a user, before validation.
///
/// Input layers (forms, prompts, JSON files) build these values and hand
/// them to [`Beam::add_point_load`](crate::Beam::add_point_load).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoadInput {
    pub position: f64,
    pub magnitude: f64,
}

/// A UDL as collected from a user, before validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UdlInput {
    pub start: f64,
    pub end: f64,
    pub intensity: f64,
}

// ============================================================================
// Tests
// ============================================================================
