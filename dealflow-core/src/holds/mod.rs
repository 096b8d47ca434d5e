//! Hold-strategy calculators: BRRRR and subject-to projections over a
//! shared fixed-rate amortization formula. Both are independent of the
//! grading pipeline; they consume the same raw property facts.

pub mod amortization;
pub mod brrrr;
pub mod subto;

pub use amortization::monthly_payment;
pub use brrrr::{BrrrrInputs, BrrrrProjection};
pub use subto::{SubtoInputs, SubtoProjection};
