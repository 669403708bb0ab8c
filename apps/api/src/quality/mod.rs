// Report quality engine.
// Implements: heading-based section parsing, additive quality validation, score capping.
// Everything here is pure and synchronous; handlers call it inline.

pub mod confidence;
pub mod handlers;
pub mod sections;
pub mod validator;

pub use confidence::{ai_confidence, cap_quality_score};
pub use sections::{parse_sections, SectionMap};
pub use validator::{validate_sections, ValidationStatus};
