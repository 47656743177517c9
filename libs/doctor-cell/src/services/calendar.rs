use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::ScheduleError;

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Sun, "sunday"),
    (Weekday::Mon, "monday"),
    (Weekday::Tue, "tuesday"),
    (Weekday::Wed, "wednesday"),
    (Weekday::Thu, "thursday"),
    (Weekday::Fri, "friday"),
    (Weekday::Sat, "saturday"),
];

/// Lower-case English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

/// `YYYY-MM-DD`, the format dates are stored and compared in.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Only the seven full English names are accepted, in any case.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(_, candidate)| *candidate == name)
        .map(|(day, _)| *day)
}

/// Resolves "today", "tomorrow" or a weekday name against `today`.
///
/// A weekday resolves to its next occurrence strictly after `today`, so asking
/// for today's own weekday lands one week ahead.
pub fn resolve_day(input: &str, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        other => {
            let target = parse_weekday(other)
                .ok_or_else(|| ScheduleError::InvalidDay(input.to_string()))?;
            let current = today.weekday().num_days_from_sunday() as i64;
            let wanted = target.num_days_from_sunday() as i64;
            let days_ahead = match (wanted - current + 7) % 7 {
                0 => 7,
                n => n,
            };
            Ok(today + Duration::days(days_ahead))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_names_round_trip() {
        for (day, name) in WEEKDAYS {
            assert_eq!(weekday_name(day), name);
            assert_eq!(parse_weekday(name), Some(day));
        }
    }

    #[test]
    fn abbreviations_are_not_weekdays() {
        assert_eq!(parse_weekday("mon"), None);
        assert_eq!(parse_weekday("Thurs"), None);
    }

    #[test]
    fn today_and_tomorrow() {
        let friday = date(2024, 3, 1);
        assert_eq!(resolve_day("today", friday).unwrap(), friday);
        assert_eq!(resolve_day("tomorrow", friday).unwrap(), date(2024, 3, 2));
    }

    #[test]
    fn tomorrow_crosses_month_and_year() {
        assert_eq!(resolve_day("tomorrow", date(2024, 2, 29)).unwrap(), date(2024, 3, 1));
        assert_eq!(resolve_day("tomorrow", date(2023, 12, 31)).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn same_weekday_resolves_one_week_ahead() {
        let friday = date(2024, 3, 1);
        assert_eq!(resolve_day("friday", friday).unwrap(), date(2024, 3, 8));
        assert_eq!(resolve_day("Friday", friday).unwrap(), date(2024, 3, 8));
    }

    #[test]
    fn weekday_resolves_to_next_occurrence() {
        let friday = date(2024, 3, 1);
        assert_eq!(resolve_day("saturday", friday).unwrap(), date(2024, 3, 2));
        assert_eq!(resolve_day("MONDAY", friday).unwrap(), date(2024, 3, 4));
        assert_eq!(resolve_day("thursday", friday).unwrap(), date(2024, 3, 7));
    }

    #[test]
    fn resolved_weekday_is_never_today() {
        let start = date(2024, 3, 1);
        for offset in 0..7 {
            let today = start + Duration::days(offset);
            for (day, name) in WEEKDAYS {
                let resolved = resolve_day(name, today).unwrap();
                assert_eq!(resolved.weekday(), day);
                assert!(resolved > today);
                assert!(resolved <= today + Duration::days(7));
            }
        }
    }

    #[test]
    fn unknown_day_is_rejected() {
        assert_matches!(
            resolve_day("someday", date(2024, 3, 1)),
            Err(ScheduleError::InvalidDay(day)) if day == "someday"
        );
        assert_matches!(resolve_day("", date(2024, 3, 1)), Err(ScheduleError::InvalidDay(_)));
    }
}
