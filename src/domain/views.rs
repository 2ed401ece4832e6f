// src/domain/views.rs

//! Read-only derivations over a snapshot of the record list.

use chrono::NaiveDate;

use crate::domain::conversation::{Category, ConversationRecord, Region, Status};

pub const TOP_REGIONS: usize = 5;

/// Dashboard figures.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total: usize,
    pub created_today: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub top_regions: Vec<RegionShare>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub region: Region,
    pub count: usize,
    /// Share of all records, 0..=100.
    pub percent: f64,
}

/// Every category in fixed order, each with its records (possibly none).
pub fn group_by_category(records: &[ConversationRecord]) -> Vec<(Category, Vec<ConversationRecord>)> {
    Category::ALL
        .iter()
        .map(|category| {
            let group = records
                .iter()
                .filter(|r| r.category == *category)
                .cloned()
                .collect();
            (*category, group)
        })
        .collect()
}

/// Non-empty categories with their counts, in fixed category order.
pub fn category_counts(records: &[ConversationRecord]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|category| (*category, records.iter().filter(|r| r.category == *category).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

pub fn group_by_region(records: &[ConversationRecord], region: Region) -> Vec<ConversationRecord> {
    records.iter().filter(|r| r.region == region).cloned().collect()
}

pub fn count_by_region(records: &[ConversationRecord], region: Region) -> usize {
    records.iter().filter(|r| r.region == region).count()
}

/// All 27 regions in map order with their counts.
pub fn region_counts(records: &[ConversationRecord]) -> Vec<(Region, usize)> {
    Region::all()
        .map(|region| (region, count_by_region(records, region)))
        .collect()
}

pub fn group_by_status(records: &[ConversationRecord], status: Status) -> Vec<ConversationRecord> {
    records.iter().filter(|r| r.status == status).cloned().collect()
}

/// The status board: one column per pipeline stage, in pipeline order.
pub fn status_board(records: &[ConversationRecord]) -> Vec<(Status, Vec<ConversationRecord>)> {
    Status::ALL
        .iter()
        .map(|status| (*status, group_by_status(records, *status)))
        .collect()
}

/// `created_today` compares ISO date strings; no time zone is involved.
pub fn summary_stats(records: &[ConversationRecord], today: NaiveDate) -> SummaryStats {
    let today = today.format("%Y-%m-%d").to_string();
    let total = records.len();

    let mut by_region: Vec<(Region, usize)> = region_counts(records)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    // Stable sort keeps map order among equal counts.
    by_region.sort_by(|a, b| b.1.cmp(&a.1));

    let top_regions = by_region
        .into_iter()
        .take(TOP_REGIONS)
        .map(|(region, count)| RegionShare {
            region,
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        })
        .collect();

    SummaryStats {
        total,
        created_today: records
            .iter()
            .filter(|r| r.conversation_date.format("%Y-%m-%d").to_string() == today)
            .count(),
        in_progress: records.iter().filter(|r| r.status == Status::InProgress).count(),
        completed: records.iter().filter(|r| r.status == Status::Completed).count(),
        top_regions,
    }
}

/// Case-insensitive substring match on name, phone, category and region code.
/// A blank query matches nothing.
pub fn search(records: &[ConversationRecord], query: &str) -> Vec<ConversationRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.phone.to_lowercase().contains(&needle)
                || r.category.label().to_lowercase().contains(&needle)
                || r.region.code().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
