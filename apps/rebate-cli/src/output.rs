//! Rendering of calculation results for stdout.

use rebate_core::{CalculateRebateRequest, CalculateRebateResult};
use serde_json::json;

/// One human-readable line per outcome.
pub fn render_text(request: &CalculateRebateRequest, result: &CalculateRebateResult) -> String {
    match (&result.amount, &result.failure) {
        (Some(amount), _) if result.is_success() => format!(
            "Rebate {} on product {} (volume {}): {:.2}",
            request.rebate_id,
            request.product_id,
            request.volume.normalize(),
            amount.round_to_cents().amount()
        ),
        (_, Some(reason)) => format!(
            "Rebate {} on product {} not applied: {}",
            request.rebate_id, request.product_id, reason
        ),
        _ => format!(
            "Rebate {} on product {} not applied",
            request.rebate_id, request.product_id
        ),
    }
}

/// The request echoed alongside the result, as pretty JSON.
pub fn render_json(
    request: &CalculateRebateRequest,
    result: &CalculateRebateResult,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "request": request,
        "result": result,
    }))
}
