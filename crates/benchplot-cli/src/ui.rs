//! UI helpers for console display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a warning message to stderr.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("Warning: {text}");
    } else {
        eprintln!("{} {text}", style("Warning:").yellow().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn print_warning_does_not_panic() {
        print_warning("For OMP mode, expected 54 data blocks. Found: 53");
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("line 3: cannot parse \"abc\" as a number");
        print_error("");
    }
}
