//! Shear Force and Bending Moment
//!
//! Closed-form evaluation of internal shear and moment at a section `x`
//! measured from the left support. Each load contributes a piecewise term
//! (see [`PointLoad::shear_drop_at`] and friends) and the evaluator sums them
//! on top of the left reaction:
//!
//! ```text
//! V(x) = R_left     - Σ (loads passed at x)
//! M(x) = R_left * x - Σ (moments of loads passed at x about the section)
//! ```
//!
//! ## Sign Convention
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on bottom fiber)
//!
//! [`PointLoad::shear_drop_at`]: crate::loads::PointLoad::shear_drop_at

use crate::calculations::reactions::Reactions;
use crate::errors::{BeamError, BeamResult};
use crate::loads::LoadSet;

/// Internal force evaluator over a load set and its solved reactions.
///
/// Holds no state of its own: every query is a pure function of the loads
/// and reactions it borrows.
#[derive(Debug, Clone, Copy)]
pub struct InternalForces<'a> {
    loads: &'a LoadSet,
    reactions: Reactions,
}

impl<'a> InternalForces<'a> {
    /// Evaluator for `loads` with already-solved `reactions`
    pub fn new(loads: &'a LoadSet, reactions: Reactions) -> Self {
        Self { loads, reactions }
    }

    /// Evaluator over a possibly-unsolved reaction cache.
    ///
    /// Fails with `UninitializedReactions` when `cached` is empty. Callers
    /// that want reactions solved on demand use
    /// [`Beam::forces`](crate::Beam::forces) instead.
    pub fn from_cache(loads: &'a LoadSet, cached: Option<Reactions>) -> BeamResult<Self> {
        cached
            .map(|reactions| Self::new(loads, reactions))
            .ok_or(BeamError::UninitializedReactions)
    }

    /// Reactions this evaluator was built with
    pub fn reactions(&self) -> Reactions {
        self.reactions
    }

    /// Span length
    pub fn length(&self) -> f64 {
        self.loads.span()
    }

    fn check_position(&self, x: f64) -> BeamResult<f64> {
        let length = self.length();
        if (0.0..=length).contains(&x) {
            Ok(x)
        } else {
            Err(BeamError::PositionOutOfRange { x, length })
        }
    }

    /// Shear force at `x`, which must lie in `[0, length]`.
    ///
    /// A load positioned exactly at `x` is already included.
    pub fn shear_at(&self, x: f64) -> BeamResult<f64> {
        self.check_position(x).map(|x| self.shear_unchecked(x))
    }

    /// Bending moment at `x`, which must lie in `[0, length]`
    pub fn bending_moment_at(&self, x: f64) -> BeamResult<f64> {
        self.check_position(x).map(|x| self.moment_unchecked(x))
    }

    pub(crate) fn shear_unchecked(&self, x: f64) -> f64 {
        let points: f64 = self
            .loads
            .point_loads()
            .iter()
            .map(|load| load.shear_drop_at(x))
            .sum();
        let udls: f64 = self
            .loads
            .udls()
            .iter()
            .map(|load| load.shear_drop_at(x))
            .sum();
        self.reactions.left - points - udls
    }

    pub(crate) fn moment_unchecked(&self, x: f64) -> f64 {
        let points: f64 = self
            .loads
            .point_loads()
            .iter()
            .map(|load| load.moment_drop_at(x))
            .sum();
        let udls: f64 = self
            .loads
            .udls()
            .iter()
            .map(|load| load.moment_drop_at(x))
            .sum();
        self.reactions.left * x - points - udls
    }
}
