//! Month and entity filters.

use newsmood_data::{Dataset, MonthKey};

/// Case-folded form of an entity name, shared by matching and lookups.
pub(crate) fn fold_entity(entity: &str) -> String {
    entity.trim().to_lowercase()
}

/// Returns true if `headline` mentions `entity`.
///
/// Matching is case-insensitive substring containment. A missing or blank
/// headline never matches, and neither does an empty entity name.
pub fn mentions(headline: Option<&str>, entity: &str) -> bool {
    let entity = fold_entity(entity);
    if entity.is_empty() {
        return false;
    }
    headline
        .filter(|text| !text.trim().is_empty())
        .is_some_and(|text| text.to_lowercase().contains(&entity))
}

/// Records published in `month`, in original order.
///
/// A month outside the dataset's supported range yields an empty dataset.
pub fn filter_by_month(dataset: &Dataset, month: MonthKey) -> Dataset {
    if !dataset.supports(month) {
        log::warn!("Month {} is outside the supported range", month);
        return dataset.empty_like();
    }
    let filtered = dataset.filter(|r| r.month() == month);
    log::debug!("Month {}: {} of {} records", month, filtered.len(), dataset.len());
    filtered
}

/// Records whose headline mentions `entity`, in original order.
///
/// Entities are not exclusive: a headline naming two entities is kept by
/// both filters.
pub fn filter_by_entity(dataset: &Dataset, entity: &str) -> Dataset {
    let filtered = dataset.filter(|r| mentions(r.headline.as_deref(), entity));
    log::debug!("Entity {}: {} of {} records", entity, filtered.len(), dataset.len());
    filtered
}
