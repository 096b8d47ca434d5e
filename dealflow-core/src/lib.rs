//! DealFlow Core — deal evaluation and buyer matching for wholesale
//! real-estate acquisitions.
//!
//! Five stateless components, composed one-way:
//! - Offer calculator: (ARV, rehab) → 70%/75% MAO anchors
//! - Grading engine: anchors → letter grade + strategy set
//! - Lead scoring: seller categoricals → bounded score
//! - Buyer matching: graded deal × roster snapshot → ranked matches
//! - Hold calculators: BRRRR and subject-to cash-flow projections
//!
//! Everything is a pure function over its inputs plus a read-only roster
//! snapshot; persistence, lookup services, and document rendering are the
//! caller's collaborators.

pub mod documents;
pub mod domain;
pub mod error;
pub mod evaluate;
pub mod grading;
pub mod holds;
pub mod lead_score;
pub mod matching;
pub mod money;
pub mod offers;
pub mod testdata;

pub use error::EngineError;
