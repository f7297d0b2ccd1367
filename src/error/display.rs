use std::{fmt, path::Path};

use owo_colors::OwoColorize;

/// A problem encountered getting a recipe loaded, reported before any
/// rescaling happens. The core transform itself never fails on content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

// Verbose detailed explanation
impl<'i> LoadingError<'i> {
    pub fn full_details(&self) -> String {
        let mut output = format!(
            "{}: {}\n{}",
            "error".bright_red(),
            self.problem
                .bold(),
            self.filename
                .to_string_lossy()
        );

        if !self
            .details
            .is_empty()
        {
            output.push_str("\n\n");
            output.push_str(&self.details);
        }

        output
    }
}

// Concise version for internal use
impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {}: {}",
            self.filename
                .to_string_lossy(),
            self.problem
        )
    }
}
