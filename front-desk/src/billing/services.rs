//! Service line items

use rust_decimal::Decimal;
use shared::models::{BookingService, ServiceStatus};

use super::to_decimal;

/// Merge repeated Ordered lines of the same service
///
/// Lines sharing a `serviceId` with status Ordered collapse into the first
/// of them with quantities added; order of first appearance is kept. Other
/// lines (delivered, unknown status, no service id) pass through untouched.
pub fn merge_service_lines(lines: &[BookingService]) -> Vec<BookingService> {
    let mut merged: Vec<BookingService> = Vec::with_capacity(lines.len());

    for line in lines {
        let mergeable = line.service_status == ServiceStatus::Ordered && line.service_id.is_some();
        if mergeable
            && let Some(existing) = merged.iter_mut().find(|m| {
                m.service_status == ServiceStatus::Ordered && m.service_id == line.service_id
            })
        {
            let quantity = existing.effective_quantity() + line.effective_quantity();
            existing.quantity = Some(quantity);
            continue;
        }
        merged.push(line.clone());
    }

    merged
}

/// price × quantity of one line (missing price counts as 0)
pub fn line_total(line: &BookingService) -> Decimal {
    line.price.map(to_decimal).unwrap_or(Decimal::ZERO) * Decimal::from(line.effective_quantity())
}

pub fn service_total(lines: &[BookingService]) -> Decimal {
    lines.iter().map(line_total).sum()
}
