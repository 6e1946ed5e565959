//! FIFO cost-basis lot consumption for asset liquidation.
//!
//! Lots are consumed oldest-first; a partial sale of a lot consumes its cost
//! basis proportionally. The realized gain of a sale is the net proceeds
//! minus the cost basis returned here.

use crate::model::AssetLot;

/// Value below which an exhausted lot is dropped.
const LOT_EPSILON: f64 = 1e-9;

/// Consume lots FIFO to cover `sell_value` (in the asset's currency) and
/// return the total cost basis of what was consumed.
///
/// Partial consumption subtracts value and cost basis from the front lot
/// proportionally; fully-consumed lots are removed.
pub fn consume_lots_fifo(lots: &mut Vec<AssetLot>, sell_value: f64) -> f64 {
    let mut remaining = sell_value;
    let mut consumed_cost_basis = 0.0;

    while remaining > 0.0 && !lots.is_empty() {
        let lot = &mut lots[0];
        let take = lot.value.min(remaining);
        let ratio = if lot.value > 0.0 { take / lot.value } else { 0.0 };

        consumed_cost_basis += lot.cost_basis * ratio;
        lot.cost_basis -= lot.cost_basis * ratio;
        lot.value -= take;
        remaining -= take;

        if lot.value <= LOT_EPSILON {
            lots.remove(0);
        }
    }

    consumed_cost_basis
}

/// Sum of remaining lot values for an asset.
pub fn lots_total_value(lots: &[AssetLot]) -> f64 {
    lots.iter().map(|lot| lot.value).sum()
}
