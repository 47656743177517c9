//! Parsing of the comma-separated schedule columns stored on a doctor.
//!
//! `available_days` holds free-form weekday names ("Monday, wed, FRIDAY") and
//! `available_times` holds opaque slot labels ("09:00-09:30"). Both are split on
//! commas and trimmed; day tokens are additionally lower-cased. Empty tokens are
//! dropped so an empty column yields no entries.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub days: Vec<String>,
    pub slots: Vec<String>,
}

impl WeeklySchedule {
    pub fn parse(available_days: &str, available_times: &str) -> Self {
        Self {
            days: parse_day_tokens(available_days),
            slots: parse_time_tokens(available_times),
        }
    }

    /// True when any day token contains `weekday` (lower-case English name).
    ///
    /// Substring containment is permissive: an abbreviation never matches a full
    /// name, but any token that happens to contain the name does.
    pub fn works_on(&self, weekday: &str) -> bool {
        self.days.iter().any(|day| day.contains(weekday))
    }
}

pub fn parse_day_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Order and duplicates are preserved.
pub fn parse_time_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_tokens_are_trimmed_and_lower_cased() {
        assert_eq!(
            parse_day_tokens(" Monday,WEDNESDAY , friday"),
            vec!["monday", "wednesday", "friday"]
        );
    }

    #[test]
    fn time_tokens_keep_order_and_duplicates() {
        assert_eq!(
            parse_time_tokens("10:00, 9:00,10:00"),
            vec!["10:00", "9:00", "10:00"]
        );
    }

    #[test]
    fn time_tokens_keep_case() {
        assert_eq!(parse_time_tokens("9am, 10AM"), vec!["9am", "10AM"]);
    }

    #[test]
    fn empty_columns_parse_to_nothing() {
        let schedule = WeeklySchedule::parse("", "");
        assert!(schedule.days.is_empty());
        assert!(schedule.slots.is_empty());
        assert_eq!(parse_time_tokens(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn works_on_uses_substring_match() {
        let schedule = WeeklySchedule::parse("Mondays only, Wed", "9:00");
        assert!(schedule.works_on("monday"));
        assert!(!schedule.works_on("wednesday"));
    }
}
