//! Rental-hold (BRRRR) projection.
//!
//! Buy, rehab, refinance at a target LTV of ARV, rent the unit, and measure
//! the cash left in the deal against its annual cash flow.

use crate::error::{require_non_negative, EngineError};
use crate::holds::amortization::monthly_payment;
use serde::{Deserialize, Serialize};

/// Months on the refinance note.
const REFI_TERM_MONTHS: u32 = 360;

/// Inputs for a BRRRR projection. Defaults mirror common deal-desk
/// assumptions: 75% refi LTV, $6,000 closing, 7% note, 8% management,
/// 5% maintenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrrrrInputs {
    pub purchase_price: f64,
    pub rehab: f64,
    pub arv: f64,
    pub refinance_ltv: f64,
    pub closing_costs: f64,
    pub refinance_rate: f64,
    pub monthly_rent: f64,
    pub annual_taxes: f64,
    pub annual_insurance: f64,
    /// Management fee as a fraction of rent.
    pub management_pct: f64,
    /// Maintenance reserve as a fraction of rent.
    pub maintenance_pct: f64,
}

impl Default for BrrrrInputs {
    fn default() -> Self {
        Self {
            purchase_price: 0.0,
            rehab: 0.0,
            arv: 0.0,
            refinance_ltv: 0.75,
            closing_costs: 6_000.0,
            refinance_rate: 0.07,
            monthly_rent: 0.0,
            annual_taxes: 0.0,
            annual_insurance: 0.0,
            management_pct: 0.08,
            maintenance_pct: 0.05,
        }
    }
}

/// BRRRR projection outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrrrrProjection {
    /// purchase + rehab + closing.
    pub total_cash_invested: f64,
    /// ARV × LTV.
    pub new_loan: f64,
    /// Monthly debt service on the refinance note.
    pub monthly_debt_service: f64,
    /// Rent net of management, maintenance, taxes, and insurance.
    pub net_operating_income: f64,
    /// NOI minus debt service.
    pub monthly_cash_flow: f64,
    /// Capital returned at refinance, floored at zero.
    pub cash_recovered: f64,
    /// Annual cash flow over cash left in the deal, as a percentage.
    pub cash_on_cash_pct: f64,
    /// ARV minus the new loan, floored at zero.
    pub equity_after_refinance: f64,
}

/// Run the projection. All principal/rate inputs must be non-negative.
pub fn project(inputs: &BrrrrInputs) -> Result<BrrrrProjection, EngineError> {
    require_non_negative("purchase_price", inputs.purchase_price)?;
    require_non_negative("rehab", inputs.rehab)?;
    require_non_negative("arv", inputs.arv)?;
    require_non_negative("refinance_ltv", inputs.refinance_ltv)?;
    require_non_negative("closing_costs", inputs.closing_costs)?;
    require_non_negative("refinance_rate", inputs.refinance_rate)?;
    require_non_negative("monthly_rent", inputs.monthly_rent)?;
    require_non_negative("annual_taxes", inputs.annual_taxes)?;
    require_non_negative("annual_insurance", inputs.annual_insurance)?;
    require_non_negative("management_pct", inputs.management_pct)?;
    require_non_negative("maintenance_pct", inputs.maintenance_pct)?;

    let total_cash_invested = inputs.purchase_price + inputs.rehab + inputs.closing_costs;
    let new_loan = inputs.arv * inputs.refinance_ltv;
    let monthly_debt_service = monthly_payment(new_loan, inputs.refinance_rate, REFI_TERM_MONTHS);

    let rent = inputs.monthly_rent;
    let net_operating_income = rent
        - rent * inputs.management_pct
        - rent * inputs.maintenance_pct
        - inputs.annual_taxes / 12.0
        - inputs.annual_insurance / 12.0;

    let monthly_cash_flow = net_operating_income - monthly_debt_service;
    let cash_recovered = (new_loan - total_cash_invested).max(0.0);

    // max(1, …) floors the denominator when the refinance returns all
    // capital; cash-on-cash on zero basis is reported against $1.
    let cash_left_in = (total_cash_invested - new_loan).max(1.0);
    let cash_on_cash_pct = (monthly_cash_flow * 12.0) / cash_left_in * 100.0;

    let equity_after_refinance = (inputs.arv - new_loan).max(0.0);

    Ok(BrrrrProjection {
        total_cash_invested,
        new_loan,
        monthly_debt_service,
        net_operating_income,
        monthly_cash_flow,
        cash_recovered,
        cash_on_cash_pct,
        equity_after_refinance,
    })
}
