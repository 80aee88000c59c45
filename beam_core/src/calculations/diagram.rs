//! Diagram Sampling
//!
//! Drives [`InternalForces`] over an ordered set of positions to produce the
//! `(x, V, M)` sequences that shear and moment diagrams are drawn from.
//!
//! Sampling is evenly spaced from 0 to the span length inclusive. The sampler
//! is restartable: [`DiagramSampler::samples`] returns a cloneable iterator,
//! and two passes over an unchanged beam yield identical points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::internal_forces::InternalForces;
use crate::calculations::reactions::Reactions;
use crate::errors::{BeamError, BeamResult};

/// Number of diagram points front ends use when none is requested
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// One sampled section of the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Distance from the left support
    pub x: f64,
    /// Shear force at x
    pub shear: f64,
    /// Bending moment at x
    pub moment: f64,
}

// ============================================================================
// Sample Positions
// ============================================================================

/// Evenly spaced positions from 0 to `length` inclusive
#[derive(Debug, Clone)]
pub struct SamplePositions {
    length: f64,
    intervals: usize,
    next: usize,
}

impl SamplePositions {
    /// `count` positions with `count - 1` equal intervals.
    ///
    /// Fails with `InvalidSampleCount` for `count < 2`.
    pub fn new(length: f64, count: usize) -> BeamResult<Self> {
        if count < 2 {
            return Err(BeamError::InvalidSampleCount { requested: count });
        }
        Ok(Self {
            length,
            intervals: count - 1,
            next: 0,
        })
    }

    fn x_at(&self, index: usize) -> f64 {
        // Pin the last point to the span end so it never drifts past it
        if index == self.intervals {
            self.length
        } else {
            // Fraction first so spans near f64::MAX cannot overflow
            (self.length * (index as f64 / self.intervals as f64)).min(self.length)
        }
    }
}

impl Iterator for SamplePositions {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.intervals {
            return None;
        }
        let x = self.x_at(self.next);
        self.next += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.intervals + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SamplePositions {}

// ============================================================================
// Sampler
// ============================================================================

/// Lazily evaluated diagram points at evenly spaced positions
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    forces: InternalForces<'a>,
    positions: SamplePositions,
}

impl Iterator for Samples<'_> {
    type Item = DiagramPoint;

    fn next(&mut self) -> Option<DiagramPoint> {
        let x = self.positions.next()?;
        Some(DiagramPoint {
            x,
            shear: self.forces.shear_unchecked(x),
            moment: self.forces.moment_unchecked(x),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for Samples<'_> {}

/// Samples shear and moment along the span
#[derive(Debug, Clone, Copy)]
pub struct DiagramSampler<'a> {
    forces: InternalForces<'a>,
}

impl<'a> DiagramSampler<'a> {
    pub fn new(forces: InternalForces<'a>) -> Self {
        Self { forces }
    }

    /// Iterator over `n` evenly spaced points; cloning it restarts the pass
    pub fn samples(&self, n: usize) -> BeamResult<Samples<'a>> {
        let positions = SamplePositions::new(self.forces.length(), n)?;
        Ok(Samples {
            forces: self.forces,
            positions,
        })
    }

    /// `n` evenly spaced points from 0 to the span length inclusive
    pub fn sample(&self, n: usize) -> BeamResult<Vec<DiagramPoint>> {
        let points: Vec<DiagramPoint> = self.samples(n)?.collect();
        debug!(count = points.len(), length = self.forces.length(), "diagram sampled");
        Ok(points)
    }

    /// Points at caller-supplied positions, in the order given.
    ///
    /// Every position must lie on the span.
    pub fn sample_at(&self, positions: &[f64]) -> BeamResult<Vec<DiagramPoint>> {
        positions
            .iter()
            .map(|&x| -> BeamResult<DiagramPoint> {
                Ok(DiagramPoint {
                    x,
                    shear: self.forces.shear_at(x)?,
                    moment: self.forces.bending_moment_at(x)?,
                })
            })
            .collect()
    }
}

// ============================================================================
// Diagram
// ============================================================================

/// A sampled diagram together with the beam it describes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Beam label
    pub name: String,
    /// Span length
    pub length: f64,
    /// Support reactions the diagram was evaluated with
    pub reactions: Reactions,
    /// Sampled points, x increasing
    pub points: Vec<DiagramPoint>,
}

/// Peak values found in a sampled diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    /// Shear with the largest magnitude (sign preserved)
    pub max_shear: f64,
    pub max_shear_position: f64,
    /// Most positive (sagging) moment
    pub max_moment: f64,
    pub max_moment_position: f64,
    /// Most negative (hogging) moment
    pub min_moment: f64,
    pub min_moment_position: f64,
}

impl Diagram {
    /// `(x, V)` pairs for plotting
    pub fn shear_series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.shear)).collect()
    }

    /// `(x, M)` pairs for plotting
    pub fn moment_series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.moment)).collect()
    }

    /// Peak shear and moment over the sampled points.
    ///
    /// Ties keep the first (leftmost) point. Returns `None` for an empty
    /// diagram.
    pub fn extremes(&self) -> Option<Extremes> {
        let first = self.points.first()?;
        let mut extremes = Extremes {
            max_shear: first.shear,
            max_shear_position: first.x,
            max_moment: first.moment,
            max_moment_position: first.x,
            min_moment: first.moment,
            min_moment_position: first.x,
        };

        for point in &self.points[1..] {
            if point.shear.abs() > extremes.max_shear.abs() {
                extremes.max_shear = point.shear;
                extremes.max_shear_position = point.x;
            }
            if point.moment > extremes.max_moment {
                extremes.max_moment = point.moment;
                extremes.max_moment_position = point.x;
            }
            if point.moment < extremes.min_moment {
                extremes.min_moment = point.moment;
                extremes.min_moment_position = point.x;
            }
        }

        Some(extremes)
    }
}
