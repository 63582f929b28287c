use anyhow::Context;
use chrono::{Days, NaiveDate};

/// Strict `%Y-%m-%d`, the `<input type="date">` wire format. The error
/// text is surfaced as form validation copy, so keep it descriptive.
pub fn parse_input_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short due label for list rows: "Today", "Tomorrow", or "Jan 25".
pub fn friendly_due(due: NaiveDate, today: NaiveDate) -> String {
    if due == today {
        return "Today".to_string();
    }
    if Some(due) == today.checked_add_days(Days::new(1)) {
        return "Tomorrow".to_string();
    }
    due.format("%b %-d").to_string()
}

/// Long form for the detail panel: "Monday, January 22, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Compact estimate badge: "45m", "2h", "1h 30m".
pub fn estimated_time_text(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{hours}h")
    }
}

/// Detail-panel form: "45 minutes", "2 hours", "1h 30m"; absent
/// reads "Not set".
pub fn estimated_time_long(minutes: Option<u32>) -> String {
    let Some(minutes) = minutes else {
        return "Not set".to_string();
    };
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{hours} hours")
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        estimated_time_long, estimated_time_text, format_input_date, friendly_due, long_date,
        parse_input_date,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_iso_dates_and_rejects_everything_else() {
        assert_eq!(
            parse_input_date("2024-01-25").expect("iso date"),
            date(2024, 1, 25)
        );
        assert_eq!(
            parse_input_date(" 2024-01-25 ").expect("trimmed"),
            date(2024, 1, 25)
        );

        for bad in ["", "tomorrow", "01/25/2024", "2024-13-01", "2024-02-30"] {
            let err = parse_input_date(bad).expect_err("rejected");
            assert!(err.to_string().contains("invalid date"), "input: {bad}");
        }
    }

    #[test]
    fn input_format_round_trips() {
        let d = date(2024, 1, 5);
        assert_eq!(format_input_date(d), "2024-01-05");
        assert_eq!(parse_input_date(&format_input_date(d)).expect("round trip"), d);
    }

    #[test]
    fn friendly_due_labels() {
        let today = date(2024, 1, 20);
        assert_eq!(friendly_due(today, today), "Today");
        assert_eq!(friendly_due(date(2024, 1, 21), today), "Tomorrow");
        assert_eq!(friendly_due(date(2024, 1, 25), today), "Jan 25");
        assert_eq!(friendly_due(date(2024, 1, 18), today), "Jan 18");
    }

    #[test]
    fn long_date_spells_out_weekday_and_month() {
        assert_eq!(long_date(date(2024, 1, 22)), "Monday, January 22, 2024");
    }

    #[test]
    fn estimate_text_forms() {
        assert_eq!(estimated_time_text(45), "45m");
        assert_eq!(estimated_time_text(120), "2h");
        assert_eq!(estimated_time_text(90), "1h 30m");

        assert_eq!(estimated_time_long(None), "Not set");
        assert_eq!(estimated_time_long(Some(45)), "45 minutes");
        assert_eq!(estimated_time_long(Some(120)), "2 hours");
        assert_eq!(estimated_time_long(Some(90)), "1h 30m");
    }
}
