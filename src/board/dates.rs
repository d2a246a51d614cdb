/**
 * Date Formatting
 *
 * Display formatting for the board page: the fixed `dd MMMM yyyy` creation
 * date attached to each task, and the pt-BR relative distance shown in the
 * supporter panel ("3 dias", "cerca de 1 mês", ...). The distance wording
 * and thresholds follow the original page's formatter.
 */

use chrono::{DateTime, Utc};

/// Format a creation timestamp as `dd MMMM yyyy` (e.g. "05 August 2024")
pub fn format_created(created: &DateTime<Utc>) -> String {
    created.format("%d %B %Y").to_string()
}

/// Human distance between a past instant and `now`, in pt-BR wording
///
/// Timestamps in the future (clock skew between the donation service and
/// this server) collapse to "menos de um minuto".
pub fn format_distance(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - from).num_seconds().max(0);
    let minutes = seconds / 60;

    if minutes < 1 {
        return "menos de um minuto".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minuto", "minutos");
    }
    if minutes < 90 {
        return "cerca de 1 hora".to_string();
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hora", "horas");
    }

    let days = hours / 24;
    if days < 30 {
        return plural(days, "dia", "dias");
    }
    if days < 60 {
        return "cerca de 1 mês".to_string();
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "mês", "meses");
    }

    let years = months / 12;
    if years == 1 {
        "cerca de 1 ano".to_string()
    } else {
        format!("cerca de {} anos", years)
    }
}

fn plural(n: i64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_created_pads_day() {
        let created = Utc.with_ymd_and_hms(2024, 8, 5, 10, 0, 0).unwrap();
        assert_eq!(format_created(&created), "05 August 2024");
    }

    #[test]
    fn test_format_created_full_month_name() {
        let created = Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(format_created(&created), "25 December 2023");
    }

    #[test]
    fn test_distance_under_a_minute() {
        let now = Utc::now();
        assert_eq!(format_distance(now - Duration::seconds(10), now), "menos de um minuto");
    }

    #[test]
    fn test_distance_minutes() {
        let now = Utc::now();
        assert_eq!(format_distance(now - Duration::minutes(1), now), "1 minuto");
        assert_eq!(format_distance(now - Duration::minutes(30), now), "30 minutos");
    }

    #[test]
    fn test_distance_about_an_hour() {
        let now = Utc::now();
        assert_eq!(format_distance(now - Duration::minutes(60), now), "cerca de 1 hora");
    }

    #[test]
    fn test_distance_days() {
        let now = Utc::now();
        assert_eq!(format_distance(now - Duration::days(3), now), "3 dias");
    }

    #[test]
    fn test_distance_about_a_month() {
        let now = Utc::now();
        assert_eq!(format_distance(now - Duration::days(31), now), "cerca de 1 mês");
    }

    #[test]
    fn test_distance_years() {
        let now = Utc::now();
        assert_eq!(format_distance(now - Duration::days(400), now), "cerca de 1 ano");
    }

    #[test]
    fn test_future_timestamp_collapses() {
        let now = Utc::now();
        assert_eq!(format_distance(now + Duration::hours(2), now), "menos de um minuto");
    }
}
