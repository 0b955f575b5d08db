//! Relative-age words for audit timestamps, Norwegian style: the table renders
//! `"{age} siden"`, so these strings carry no suffix of their own.

use chrono::{DateTime, Utc};

/// Humanized age of `then` relative to `now`: "noen sekunder", "ett minutt",
/// "3 timer", "en dag", "2 måneder", ...
pub fn age_words(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    if secs < 45 {
        return "noen sekunder".to_string();
    }
    if secs < 90 {
        return "ett minutt".to_string();
    }

    let mins = (secs as f64 / 60.0).round() as i64;
    if mins < 45 {
        return format!("{mins} minutter");
    }
    if mins < 90 {
        return "en time".to_string();
    }

    let hours = (mins as f64 / 60.0).round() as i64;
    if hours < 22 {
        return format!("{hours} timer");
    }
    if hours < 36 {
        return "en dag".to_string();
    }

    let days = (hours as f64 / 24.0).round() as i64;
    if days < 26 {
        return format!("{days} dager");
    }
    if days < 46 {
        return "en måned".to_string();
    }
    if days < 320 {
        let months = (days as f64 / 30.44).round() as i64;
        return format!("{months} måneder");
    }
    if days < 548 {
        return "ett år".to_string();
    }
    let years = (days as f64 / 365.25).round() as i64;
    format!("{years} år")
}
