//! Per-user report statistics for the dashboard and profile views.
//!
//! Plain folds over the user's reports; nothing is cached or persisted.

use serde::{Deserialize, Serialize};

use crate::models::report::ReportRow;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_reports: usize,
    pub avg_quality: f64,
    /// Milliseconds.
    pub avg_generation_time: f64,
    pub most_used_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(flatten)]
    pub dashboard: DashboardStats,
    /// `%d %b %Y` of the newest report, or "N/A".
    pub last_report_date: String,
    pub most_used_topic: String,
}

pub fn compute_dashboard_stats(reports: &[ReportRow]) -> DashboardStats {
    DashboardStats {
        total_reports: reports.len(),
        avg_quality: mean_2dp(reports.iter().map(|r| r.quality_score)),
        avg_generation_time: mean_2dp(reports.iter().map(|r| r.generation_time_ms as f64)),
        most_used_prompt: most_common(reports.iter().map(|r| r.prompt_version.as_str())),
    }
}

pub fn compute_profile_stats(reports: &[ReportRow]) -> ProfileStats {
    let last_report_date = reports
        .iter()
        .map(|r| r.created_at)
        .max()
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    ProfileStats {
        dashboard: compute_dashboard_stats(reports),
        last_report_date,
        most_used_topic: most_common(reports.iter().map(|r| r.topic.as_str())),
    }
}

/// Arithmetic mean rounded to 2 decimals; 0.0 for an empty sequence.
fn mean_2dp(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 100.0).round() / 100.0
}

/// Most frequent value. Ties go to the value seen first; "N/A" when empty.
fn most_common<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((value, n));
        }
    }
    best.map(|(v, _)| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
