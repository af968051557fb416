use crate::model::{FilterCriteria, RecipeRecord};

/// Keep the records passing every active threshold, in input order.
///
/// Pure and order-preserving: no deduplication and no output-size cap.
/// Truncating to a display size is the pagination layer's job, applied after
/// filtering.
pub fn apply_filters(records: &[RecipeRecord], criteria: &FilterCriteria) -> Vec<RecipeRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
