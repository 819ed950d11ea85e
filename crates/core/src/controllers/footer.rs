use chrono::Datelike;
use sitewire_protocol::{DomCommand, Target};

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn stamp_year(year: i32) -> DomCommand {
    DomCommand::SetText {
        target: Target::FooterYear,
        text: year.to_string(),
    }
}
