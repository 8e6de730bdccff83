mod error;

#[cfg(test)]
mod tests;

pub use error::NormalizeError;

use crate::records::ItemRecord;

/// Upper bound of the small-stack band
pub const SMALL_BAND_MAX: u64 = 64;

/// Upper bound of the partial-box band; also the full batch size above it
pub const BOX_BAND_MAX: u64 = 576;

/// Round a requested quantity up to a production batch size.
///
/// - `q <= 1`: unchanged
/// - `1 < q <= 64`: `ceil(((128 - (q-64)^2/32) // 16 + 1) * 16)`
/// - `64 < q <= 576`: `ceil(640 - (q-576)^2/520)`
/// - `q > 576`: next multiple of 576 strictly above `q // 576 * 576`
///
/// The two curve bands are evaluated in integer arithmetic. Within each
/// band the real-valued expression is positive, so floor division of the
/// scaled integers lands on the same value as the real formula.
///
/// Returns `None` when the next full batch would not fit in a `u64`,
/// which happens for the last 448 values below `u64::MAX`.
pub fn normalize_quantity(quantity: u64) -> Option<u64> {
    match quantity {
        0..=1 => Some(quantity),
        2..=SMALL_BAND_MAX => {
            let d = SMALL_BAND_MAX - quantity;
            // (128 - d²/32) / 16 == (4096 - d²) / 512, and d² <= 62² < 4096
            Some(((4096 - d * d) / 512 + 1) * 16)
        }
        q if q <= BOX_BAND_MAX => {
            let d = BOX_BAND_MAX - q;
            // ceil(640 - x) == 640 - floor(x); d² / 520 <= 511² / 520 < 640
            Some(640 - (d * d) / 520)
        }
        q => (q / BOX_BAND_MAX + 1).checked_mul(BOX_BAND_MAX),
    }
}

/// Normalize every record, preserving order and kinds.
///
/// Fails on the first record whose batch size overflows.
pub fn normalize_records(records: &[ItemRecord]) -> Result<Vec<ItemRecord>, NormalizeError> {
    records
        .iter()
        .enumerate()
        .map(|(item_index, r)| {
            let quantity =
                normalize_quantity(r.quantity).ok_or_else(|| NormalizeError::QuantityOverflow {
                    kind: r.kind.clone(),
                    item_index,
                    quantity: r.quantity,
                })?;
            Ok(ItemRecord::new(r.kind.clone(), quantity))
        })
        .collect()
}
