//! Support Reactions
//!
//! Solves the two support reactions of a simply-supported span from global
//! equilibrium. With only vertical loads this is exact statics:
//!
//! ```text
//! ΣF = 0:   R_left + R_right = W_total
//! ΣM_A = 0: R_right * L      = Σ (load * lever arm about A)
//! ```
//!
//! Loads are positive downward and reactions positive upward, so a span
//! carrying only downward loads has two positive reactions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loads::LoadSet;

/// Support reactions at the two ends of the span
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at the left support (x = 0), positive upward
    pub left: f64,
    /// Reaction at the right support (x = length), positive upward
    pub right: f64,
}

impl Reactions {
    /// Sum of both reactions
    pub fn total(&self) -> f64 {
        self.left + self.right
    }

    /// Moment of the reactions about `pivot` for a span of `length`,
    /// using the same lever-arm sign as [`LoadSet::moment_about`]
    pub fn moment_about(&self, pivot: f64, length: f64) -> f64 {
        self.left * (0.0 - pivot) + self.right * (length - pivot)
    }
}

/// Solve the support reactions for `loads` over its span.
///
/// # Example
///
/// ```
/// use beam_core::calculations::reactions::compute_reactions;
/// use beam_core::loads::LoadSet;
///
/// // 10 ft span, 1000 lb at 3 ft: R1 = P(L-a)/L, R2 = Pa/L
/// let mut loads = LoadSet::new(10.0)?;
/// loads.add_point_load(3.0, 1000.0)?;
///
/// let reactions = compute_reactions(&loads);
/// assert!((reactions.left - 700.0).abs() < 1e-9);
/// assert!((reactions.right - 300.0).abs() < 1e-9);
/// # Ok::<(), beam_core::errors::BeamError>(())
/// ```
pub fn compute_reactions(loads: &LoadSet) -> Reactions {
    let length = loads.span();
    let total_load = loads.total_load();
    let moment_about_left = loads.moment_about_left();

    let right = moment_about_left / length;
    let left = total_load - right;

    debug!(
        length,
        total_load,
        moment_about_left,
        left,
        right,
        "support reactions solved"
    );

    Reactions { left, right }
}
