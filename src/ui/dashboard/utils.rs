//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Glyph for beneficiary categories missing from the icon table
pub const FALLBACK_ICON: &str = "📊";

/// Glyph for the investment card
pub const INVESTMENT_ICON: &str = "📈";

/// Icon for one of the seven zakat beneficiary categories.
pub fn beneficiary_icon(name: &str) -> &'static str {
    match name {
        "Poor and Needy" => "👥",
        "Zakat Administrators" => "👔",
        "New Converts" => "🌟",
        "To Free Captives" => "💚",
        "The Debtors" => "💸",
        "In the Cause of Allah" => "🕌",
        "The Wayfarer" => "🧳",
        _ => FALLBACK_ICON,
    }
}

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Dashboard => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Error loading dashboard: request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Error loading dashboard: server unreachable".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_icons() {
        assert_eq!(beneficiary_icon("Poor and Needy"), "👥");
        assert_eq!(beneficiary_icon("The Wayfarer"), "🧳");
        assert_eq!(beneficiary_icon("poor and needy"), FALLBACK_ICON);
        assert_eq!(beneficiary_icon("Scholarships"), FALLBACK_ICON);
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2026-03-01 09:05:33"), "03-01 09:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Error loading dashboard: Reqwest error: error sending request"),
            "Error loading dashboard: server unreachable"
        );
        assert_eq!(
            clean_http_error_message("Error loading dashboard: HTTP 500"),
            "Error loading dashboard: HTTP 500"
        );
    }
}
