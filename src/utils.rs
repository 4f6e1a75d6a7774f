use chrono::{DateTime, Local, NaiveDate};

pub fn format_time_str(time: &DateTime<Local>) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    time.format(TIME_FMT).to_string()
}

pub fn format_date_str(date: &NaiveDate) -> String {
    const DATE_FMT: &str = "%Y-%m-%d";

    date.format(DATE_FMT).to_string()
}

pub fn now_time_str() -> String {
    format_time_str(&Local::now())
}

pub fn today_str() -> String {
    format_date_str(&Local::now().date_naive())
}

pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}
