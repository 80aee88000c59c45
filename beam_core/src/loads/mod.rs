//! Load sets for simply-supported beams
//!
//! A [`LoadSet`] holds the point loads and UDLs applied to one span, in the
//! order they were added. Every insertion is validated against the span, so a
//! load set never contains a load that lies off the beam.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::LoadSet;
//!
//! let mut loads = LoadSet::new(10.0)?;
//! loads.add_point_load(3.0, 1000.0)?;
//! loads.add_udl(2.0, 8.0, 100.0)?;
//!
//! assert_eq!(loads.len(), 2);
//! assert_eq!(loads.total_load(), 1600.0);
//! assert!(loads.add_point_load(12.0, 500.0).is_err());
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

pub mod discrete;

pub use discrete::{LoadId, PointLoad, PointLoadInput, UdlInput, UniformLoad};

use tracing::trace;

use crate::errors::{ensure_finite, BeamError, BeamResult};

/// Check a beam length: finite and strictly positive
pub(crate) fn validate_span(length: f64) -> BeamResult<f64> {
    if length.is_infinite() {
        return Err(BeamError::non_finite("length"));
    }
    if length.is_nan() || length <= 0.0 {
        return Err(BeamError::ZeroOrNegativeLength { length });
    }
    Ok(length)
}

/// Ordered collections of point loads and UDLs on a single span
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSet {
    span: f64,
    point_loads: Vec<PointLoad>,
    udls: Vec<UniformLoad>,
}

impl LoadSet {
    /// Create an empty load set for a span of `length`.
    ///
    /// Fails with `ZeroOrNegativeLength` unless `length > 0`.
    pub fn new(length: f64) -> BeamResult<Self> {
        Ok(Self {
            span: validate_span(length)?,
            point_loads: Vec::new(),
            udls: Vec::new(),
        })
    }

    /// Span the loads are validated against
    pub fn span(&self) -> f64 {
        self.span
    }

    fn ensure_on_span(&self, field: &str, value: f64) -> BeamResult<()> {
        if (0.0..=self.span).contains(&value) {
            Ok(())
        } else {
            Err(BeamError::out_of_range(field, value, self.span))
        }
    }

    /// Add a point load at `position` (positive magnitude acts downward).
    ///
    /// Nothing is appended when validation fails.
    pub fn add_point_load(&mut self, position: f64, magnitude: f64) -> BeamResult<LoadId> {
        self.ensure_on_span("position", position)?;
        ensure_finite("magnitude", magnitude)?;

        let load = PointLoad::new(position, magnitude);
        trace!(id = %load.id, position, magnitude, "point load added");
        self.point_loads.push(load);
        Ok(load.id)
    }

    /// Add a UDL of `intensity` over `[start, end]`.
    ///
    /// `InvalidUdl` is reported before range problems, so a reversed UDL is
    /// always identified as such.
    pub fn add_udl(&mut self, start: f64, end: f64, intensity: f64) -> BeamResult<LoadId> {
        ensure_finite("intensity", intensity)?;
        if start >= end {
            return Err(BeamError::InvalidUdl { start, end });
        }
        self.ensure_on_span("start", start)?;
        self.ensure_on_span("end", end)?;

        let udl = UniformLoad::new(start, end, intensity);
        trace!(id = %udl.id, start, end, intensity, "udl added");
        self.udls.push(udl);
        Ok(udl.id)
    }

    /// Remove a point load by id
    pub fn remove_point_load(&mut self, id: LoadId) -> Option<PointLoad> {
        let index = self.point_loads.iter().position(|l| l.id == id)?;
        trace!(%id, "point load removed");
        Some(self.point_loads.remove(index))
    }

    /// Remove a UDL by id
    pub fn remove_udl(&mut self, id: LoadId) -> Option<UniformLoad> {
        let index = self.udls.iter().position(|l| l.id == id)?;
        trace!(%id, "udl removed");
        Some(self.udls.remove(index))
    }

    /// Point loads in insertion order
    pub fn point_loads(&self) -> &[PointLoad] {
        &self.point_loads
    }

    /// UDLs in insertion order
    pub fn udls(&self) -> &[UniformLoad] {
        &self.udls
    }

    /// Number of loads of either kind
    pub fn len(&self) -> usize {
        self.point_loads.len() + self.udls.len()
    }

    /// Check if there are any loads defined
    pub fn is_empty(&self) -> bool {
        self.point_loads.is_empty() && self.udls.is_empty()
    }

    /// Sum of point-load magnitudes and UDL resultants
    pub fn total_load(&self) -> f64 {
        let points: f64 = self.point_loads.iter().map(|l| l.magnitude).sum();
        let udls: f64 = self.udls.iter().map(UniformLoad::resultant).sum();
        points + udls
    }

    /// Net moment of all loads about `pivot`
    pub fn moment_about(&self, pivot: f64) -> f64 {
        let points: f64 = self.point_loads.iter().map(|l| l.moment_about(pivot)).sum();
        let udls: f64 = self.udls.iter().map(|l| l.moment_about(pivot)).sum();
        points + udls
    }

    /// Net moment of all loads about the left support
    pub fn moment_about_left(&self) -> f64 {
        self.moment_about(0.0)
    }

    /// Supports, point-load positions and UDL bounds, sorted and de-duplicated.
    ///
    /// These are the positions where the shear diagram jumps or changes slope.
    pub fn critical_positions(&self) -> Vec<f64> {
        let mut positions = vec![0.0, self.span];
        positions.extend(self.point_loads.iter().map(|l| l.position));
        for udl in &self.udls {
            positions.push(udl.start);
            positions.push(udl.end);
        }

        // Every value was range-checked on insertion, so none is NaN
        positions.sort_by(f64::total_cmp);
        positions.dedup();
        positions
    }
}
