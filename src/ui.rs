//! Terminal output for both binaries.
//!
//! Progress goes to stdout, errors to stderr. `format_*` helpers build the
//! text so it can be checked without capturing the terminal.

use console::style;

use crate::boundary::BoundaryWarning;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("WARNING:").yellow().bold(), warning)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Print a non-fatal warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Show the derived candidate next to the highest existing one.
pub fn display_proposed_tag(previous: Option<&str>, new_tag: &str) {
    match previous {
        Some(old) => {
            println!("\n{}", style("Next Release Candidate:").bold());
            println!("  Latest: {}", style(old).red());
            println!("  Next:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("First Release Candidate:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Print a titled JSON document.
pub fn display_json(title: &str, json: &str) {
    println!("{}", style(title).bold());
    println!("{}", json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatters_keep_message() {
        assert!(format_error("boom").ends_with("boom"));
        assert!(format_success("done").ends_with("done"));
        assert!(format_status("working").ends_with("working"));
    }

    #[test]
    fn test_warning_includes_display_text() {
        let warning = BoundaryWarning::IgnoredTag {
            tag: "2508.x".to_string(),
            reason: "suffix 'x' is not a candidate number".to_string(),
        };
        let text = format_boundary_warning(&warning);
        assert!(text.contains("Ignoring tag '2508.x'"));
    }
}
