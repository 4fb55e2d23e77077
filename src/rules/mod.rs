//! Legality evaluation: violations, threat, formats.
//!
//! ## Key Types
//!
//! - `LegalityEvaluator`: Pure evaluation over composition + catalog
//! - `LegalityResult`: Counts, threat, violations, classification
//! - `Violation` / `Severity`: Hard violations vs format findings
//! - `Classification`: `Legal | Limited | Illegal`
//! - `ThreatOverrides`: Reserve-character threat adjustment table
//! - `FormatRule` / `TournamentFormat`: Injectable completeness checks
//!
//! Hard violations (caps, one-per-deck) make a deck illegal. Format
//! findings mark an otherwise-sound deck limited, which is the normal
//! state of a deck mid-edit.

pub mod evaluator;
pub mod result;
pub mod threat;
pub mod tournament;

pub use evaluator::{FormatContext, FormatRule, LegalityEvaluator};
pub use result::{
    Classification, LegalityNote, LegalityResult, Severity, TypeCounts, Violation,
    DRAW_HAND_THRESHOLD,
};
pub use threat::ThreatOverrides;
pub use tournament::TournamentFormat;
