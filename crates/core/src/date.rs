//! Long-form date rendering for the preview's date line.

use chrono::{Datelike, NaiveDate};
use placard_types::Language;

const ASSAMESE_MONTHS: [&str; 12] = [
    "জানুৱাৰী",
    "ফেব্ৰুৱাৰী",
    "মাৰ্চ",
    "এপ্ৰিল",
    "মে’",
    "জুন",
    "জুলাই",
    "আগষ্ট",
    "ছেপ্তেম্বৰ",
    "অক্টোবৰ",
    "নৱেম্বৰ",
    "ডিচেম্বৰ",
];

const ASSAMESE_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// `October 17, 2026` in English, `১৭ অক্টোবৰ, ২০২৬` in Assamese.
pub fn format_long(date: NaiveDate, language: Language) -> String {
    match language {
        Language::English => date.format("%B %-d, %Y").to_string(),
        Language::Assamese => {
            let month = ASSAMESE_MONTHS[date.month0() as usize];
            format!(
                "{} {}, {}",
                assamese_digits(&date.day().to_string()),
                month,
                assamese_digits(&date.year().to_string())
            )
        }
    }
}

/// The full date line, or `None` when the date does not parse.
pub fn date_line(value: &str, language: Language) -> Option<String> {
    let date = crate::state::parse_date(value)?;
    Some(format!("Date: {}", format_long(date, language)))
}

fn assamese_digits(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ASSAMESE_DIGITS[d as usize],
            None => c,
        })
        .collect()
}
