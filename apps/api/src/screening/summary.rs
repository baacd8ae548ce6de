use serde::Serialize;

use crate::screening::scorer::Decision;
use crate::store::StoredScreening;

/// Headline numbers for the results dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub average_score: f64,
    pub shortlisted: usize,
    /// Percentage of screenings shortlisted, 0–100.
    pub shortlist_ratio: f64,
}

impl DashboardSummary {
    pub fn from_screenings(screenings: &[StoredScreening]) -> Self {
        let total = screenings.len();
        if total == 0 {
            return Self {
                total: 0,
                average_score: 0.0,
                shortlisted: 0,
                shortlist_ratio: 0.0,
            };
        }

        let score_sum: u64 = screenings.iter().map(|s| u64::from(s.document.score)).sum();
        let shortlisted = screenings
            .iter()
            .filter(|s| s.document.decision == Decision::Shortlist)
            .count();

        Self {
            total,
            average_score: score_sum as f64 / total as f64,
            shortlisted,
            shortlist_ratio: shortlisted as f64 / total as f64 * 100.0,
        }
    }
}
