//! Date header text shown above the task list.
//!
//! The renderer only positions this string; producing it is a host-side
//! concern, injected through `DateHeaderSource`.

use chrono::{Local, NaiveDate};

const DATE_HEADER_FORMAT: &str = "%A\n%d/%m/%y";

/// Supplies the pre-formatted date header for a refresh.
pub trait DateHeaderSource {
    fn date_header(&self) -> String;
}

/// Formats today's local date as `"<weekday>\n<dd/mm/yy>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateHeader;

impl DateHeaderSource for LocalDateHeader {
    fn date_header(&self) -> String {
        format_date_header(Local::now().date_naive())
    }
}

/// Always returns the same header text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedDateHeader(pub String);

impl DateHeaderSource for FixedDateHeader {
    fn date_header(&self) -> String {
        self.0.clone()
    }
}

pub fn format_date_header(date: NaiveDate) -> String {
    date.format(DATE_HEADER_FORMAT).to_string()
}
