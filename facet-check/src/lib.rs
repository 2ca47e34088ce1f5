#![deny(missing_docs)]
//! Substitutability checks for facet capabilities.
//!
//! Any entity declaring a capability must be usable wherever that
//! capability is expected. [`SubstitutabilityChecker`] drives a
//! capability on every candidate entity, in every internal-state
//! variant the entity declares, and collects each invocation that
//! panics or breaks the capability's postcondition. It never stops at
//! the first violation.

mod checker;
mod config;
mod report;

pub use checker::SubstitutabilityChecker;
pub use config::CheckerConfig;
pub use report::{CheckReport, Violation, ViolationKind};
