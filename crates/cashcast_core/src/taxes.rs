//! Progressive-bracket tax math.

use crate::model::TaxBracket;

/// Tax a positive amount through the configured progressive brackets.
///
/// Brackets are consumed sequentially: each taxes the portion of the
/// remaining amount that fits its `[floor, ceiling)` width at its marginal
/// rate. Amounts beyond the last bracket's ceiling are untaxed, matching the
/// convention that the last bracket carries an effectively unbounded
/// ceiling.
pub fn progressive_tax(taxable: f64, brackets: &[TaxBracket]) -> f64 {
    let mut remaining = taxable;
    let mut tax = 0.0;

    for bracket in brackets {
        if remaining <= 0.0 {
            break;
        }
        let width = (bracket.ceiling - bracket.floor).max(0.0);
        let in_bracket = remaining.min(width);
        tax += in_bracket * bracket.rate;
        remaining -= in_bracket;
    }

    tax
}
