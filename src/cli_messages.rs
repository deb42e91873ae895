//! CLI command messaging
//!
//! Status lines for one-shot commands (`config`, reports). Report bodies go to
//! stdout untouched; these tagged lines go to stderr so piping a report into a
//! file or another tool yields only the rendered panel.

const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO",
            Tone::Warn => "WARN",
            Tone::Error => "ERROR",
            Tone::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m",
            Tone::Warn => "\x1b[1;91m",
            Tone::Error => "\x1b[1;31m",
            Tone::Success => "\x1b[1;32m",
        }
    }
}

/// Formats one tagged status line; `details` is appended after a tab when non-empty.
pub fn format_message(tone: Tone, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]{} {}", tone.color(), tone.tag(), COLOR_RESET, title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_message(tone: Tone, title: &str, details: &str) {
    eprintln!("{}", format_message(tone, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_tab_separated() {
        let line = format_message(Tone::Success, "Saved", "http://x/api");
        assert!(line.contains("[SUCCESS]"));
        assert!(line.ends_with("Saved\t http://x/api"));
    }

    #[test]
    fn empty_details_are_omitted() {
        let line = format_message(Tone::Warn, "No config file", "");
        assert!(line.ends_with("No config file"));
    }
}
