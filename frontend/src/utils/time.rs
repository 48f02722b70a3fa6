use chrono::{DateTime, Utc};

pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

pub fn format_publication_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
