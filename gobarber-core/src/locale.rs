//! Language used for date labels.

use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    pub fn locale(self) -> Locale {
        match self {
            Language::PtBr => Locale::pt_BR,
            Language::EnUs => Locale::en_US,
        }
    }

    fn day_label_format(self) -> &'static str {
        match self {
            Language::PtBr => "Dia %d de %B",
            Language::EnUs => "%B %-d",
        }
    }

    /// "Dia 10 de março" / "March 10"
    pub fn day_label(self, date: NaiveDate) -> String {
        format_date(date, self.day_label_format(), self.locale())
    }

    /// Full weekday name with its first letter capitalized ("Quarta-feira").
    pub fn weekday_label(self, date: NaiveDate) -> String {
        capitalize(&format_date(date, "%A", self.locale()))
    }
}

fn format_date(date: NaiveDate, fmt: &str, locale: Locale) -> String {
    // The offset is irrelevant for date-only fields, so UTC midnight is enough.
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
        .format_localized(fmt, locale)
        .to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
