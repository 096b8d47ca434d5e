//! Subject-to / wrap projection.
//!
//! Take over a property with the seller's mortgage in place, wrap a new
//! note around the existing balance, and measure the entry cash against the
//! exit rent. The buyer services whichever of the existing PITI or the wrap
//! payment is larger — a conservative floor.

use crate::error::{require_non_negative, EngineError};
use crate::holds::amortization::monthly_payment;
use serde::{Deserialize, Serialize};

/// Months on the wrap note.
const WRAP_TERM_MONTHS: u32 = 360;

/// Inputs for a subject-to projection. Defaults: $10,000 down, 8.5% wrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtoInputs {
    pub arv: f64,
    /// Existing mortgage balance left in place.
    pub existing_balance: f64,
    /// Rate on the existing note. Informational only — the existing payment
    /// is captured by `existing_piti`, not recomputed.
    pub existing_rate: f64,
    /// Existing monthly principal/interest/taxes/insurance.
    pub existing_piti: f64,
    /// Seller arrears cured at entry.
    pub arrears: f64,
    /// Buyer's cash down.
    pub down_payment: f64,
    pub assignment_fee: f64,
    /// Rate on the wrap note around the existing balance.
    pub wrap_rate: f64,
    /// Projected rent after exit.
    pub exit_rent: f64,
}

impl Default for SubtoInputs {
    fn default() -> Self {
        Self {
            arv: 0.0,
            existing_balance: 0.0,
            existing_rate: 0.0,
            existing_piti: 0.0,
            arrears: 0.0,
            down_payment: 10_000.0,
            assignment_fee: 0.0,
            wrap_rate: 0.085,
            exit_rent: 0.0,
        }
    }
}

/// Subject-to projection outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtoProjection {
    /// down + assignment fee + arrears.
    pub total_cash_invested: f64,
    /// Monthly payment on the wrap note.
    pub wrap_payment: f64,
    /// exit rent minus max(existing PITI, wrap payment).
    pub monthly_cash_flow: f64,
    /// ARV minus existing balance, floored at zero.
    pub equity_position: f64,
    /// Annualized cash flow over cash invested, as a percentage.
    pub annualized_roi_pct: f64,
}

/// Run the projection. All principal/rate inputs must be non-negative.
pub fn project(inputs: &SubtoInputs) -> Result<SubtoProjection, EngineError> {
    require_non_negative("arv", inputs.arv)?;
    require_non_negative("existing_balance", inputs.existing_balance)?;
    require_non_negative("existing_rate", inputs.existing_rate)?;
    require_non_negative("existing_piti", inputs.existing_piti)?;
    require_non_negative("arrears", inputs.arrears)?;
    require_non_negative("down_payment", inputs.down_payment)?;
    require_non_negative("assignment_fee", inputs.assignment_fee)?;
    require_non_negative("wrap_rate", inputs.wrap_rate)?;
    require_non_negative("exit_rent", inputs.exit_rent)?;

    let total_cash_invested = inputs.down_payment + inputs.assignment_fee + inputs.arrears;
    let wrap_payment = monthly_payment(inputs.existing_balance, inputs.wrap_rate, WRAP_TERM_MONTHS);
    let monthly_cash_flow = inputs.exit_rent - inputs.existing_piti.max(wrap_payment);
    let equity_position = (inputs.arv - inputs.existing_balance).max(0.0);

    // Same denominator floor as the BRRRR cash-on-cash: a zero-cash entry
    // reports ROI against $1 rather than dividing by zero.
    let annualized_roi_pct = (monthly_cash_flow * 12.0) / total_cash_invested.max(1.0) * 100.0;

    Ok(SubtoProjection {
        total_cash_invested,
        wrap_payment,
        monthly_cash_flow,
        equity_position,
        annualized_roi_pct,
    })
}
