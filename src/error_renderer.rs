//! Error rendering using miette
//!
//! Formats plugin errors with their code and help text, the way the host
//! prints them in its build output.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme};

/// Render an error to stderr
pub fn render_error(error: &Error) {
    eprint!("{}", render_error_to_string(error));
}

/// Render an error to a String (useful for build logs, IDE messages, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    render_with(error, GraphicalTheme::unicode())
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    render_with(error, GraphicalTheme::unicode_nocolor())
}

fn render_with(error: &Error, theme: GraphicalTheme) -> String {
    let mut out = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut out, error)
        .is_err()
    {
        // Fall back to the plain message.
        out = format!("{}\n", error);
    }
    out
}
