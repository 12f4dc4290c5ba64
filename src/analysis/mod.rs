//! Compatibility analysis over a change list.
//!
//! - [`SeverityClassifier`]: assigns a [`Severity`](crate::model::Severity) to each change
//! - [`BreakingChangeDetector`]: selects changes requiring consumer action,
//!   with impact score and migration advice
//! - [`RiskAssessor`]: aggregate score, risk level and semver recommendation

mod breaking;
pub mod migration;
mod risk;
mod severity;

pub use breaking::{impact_score, BreakingChangeDetector};
pub use risk::{recommend_semver, RiskAssessor, RiskPolicy};
pub use severity::SeverityClassifier;
