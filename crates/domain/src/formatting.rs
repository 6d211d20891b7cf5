use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Offset between the Gregorian and Thai Buddhist-era calendars.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

const THAI_MONTHS_LONG: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const THAI_MONTHS_SHORT: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.",
    "ธ.ค.",
];

/// Display style for Thai dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThaiDateStyle {
    /// `18 ตุลาคม 2569`
    #[default]
    Long,
    /// `18 ต.ค. 69`
    Short,
}

/// Formats a date in the Thai Buddhist-era calendar.
#[must_use]
pub fn format_thai_date(date: NaiveDate, style: ThaiDateStyle) -> String {
    let month_index = date.month0() as usize;
    let year = date.year() + BUDDHIST_ERA_OFFSET;

    match style {
        ThaiDateStyle::Long => format!("{} {} {year}", date.day(), THAI_MONTHS_LONG[month_index]),
        ThaiDateStyle::Short => format!(
            "{} {} {:02}",
            date.day(),
            THAI_MONTHS_SHORT[month_index],
            year.rem_euclid(100)
        ),
    }
}

/// Parses the date part of a platform timestamp.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` and plain
/// `YYYY-MM-DD` dates.
#[must_use]
pub fn parse_platform_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|timestamp| timestamp.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Formats a Thai phone number.
///
/// Ten digits become `081-234-5678`, nine digits become `02-123-4567`.
/// Anything else is returned unchanged.
#[must_use]
pub fn format_thai_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        9 => format!("{}-{}-{}", &digits[..2], &digits[2..5], &digits[5..]),
        _ => value.to_owned(),
    }
}

/// Formats an integer with comma thousands separators.
#[must_use]
pub fn format_number(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a baht amount as `฿1,234.50`.
#[must_use]
pub fn format_baht(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{sign}฿{}.{fraction}", group_thousands(whole))
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        ThaiDateStyle, escape_html, format_baht, format_number, format_thai_date,
        format_thai_phone, parse_platform_date,
    };

    #[test]
    fn formats_mobile_and_landline_numbers() {
        assert_eq!(format_thai_phone("0812345678"), "081-234-5678");
        assert_eq!(format_thai_phone("021234567"), "02-123-4567");
    }

    #[test]
    fn leaves_other_lengths_unchanged() {
        assert_eq!(format_thai_phone("12345"), "12345");
        assert_eq!(format_thai_phone("+66 81 234 5678"), "+66 81 234 5678");
        assert_eq!(format_thai_phone(""), "");
    }

    #[test]
    fn formats_buddhist_era_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default();
        assert_eq!(format_thai_date(date, ThaiDateStyle::Long), "18 ตุลาคม 2569");
        assert_eq!(format_thai_date(date, ThaiDateStyle::Short), "18 ต.ค. 69");
    }

    #[test]
    fn parses_common_platform_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert_eq!(parse_platform_date("2025-01-31T17:30:00.000Z"), expected);
        assert_eq!(parse_platform_date("2025-01-31T17:30:00"), expected);
        assert_eq!(parse_platform_date("2025-01-31"), expected);
        assert_eq!(parse_platform_date("yesterday"), None);
    }

    #[test]
    fn formats_currency_and_numbers() {
        assert_eq!(format_baht(1234.5), "฿1,234.50");
        assert_eq!(format_baht(-99.999), "-฿100.00");
        assert_eq!(format_baht(0.0), "฿0.00");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(-1000), "-1,000");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn escapes_html_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
