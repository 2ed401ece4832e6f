use crate::domain::{Category, Status};

/// (background, text) colours of a status badge.
pub fn status_badge_colors(status: Status) -> (&'static str, &'static str) {
    match status {
        Status::Started => ("#dbeafe", "#1e40af"),
        Status::InProgress => ("#fef9c3", "#854d0e"),
        Status::AwaitingReply => ("#ffedd5", "#9a3412"),
        Status::Completed => ("#dcfce7", "#166534"),
        Status::Lost => ("#fee2e2", "#991b1b"),
    }
}

/// Top border of a status-board column.
pub fn status_border(status: Status) -> &'static str {
    match status {
        Status::Started => "#3b82f6",
        Status::InProgress => "#eab308",
        Status::AwaitingReply => "#f97316",
        Status::Completed => "#22c55e",
        Status::Lost => "#ef4444",
    }
}

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Purchase => "#3b82f6",
        Category::Sale => "#22c55e",
        Category::Financing => "#a855f7",
        Category::Consortium => "#f97316",
        Category::Appraisal => "#eab308",
        Category::QuickQuestion => "#ec4899",
        Category::Support => "#ef4444",
        Category::Other => "#6b7280",
    }
}
