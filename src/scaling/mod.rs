//! Document-level conversion of recipe text

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::LoadingError;
use crate::language::parse_number;

mod scaler;

pub use scaler::*;

/// Read a recipe file and return an owned String. We pass that ownership
/// back to the caller so that borrowed line reports can share its lifetime.
/// A filename of "-" reads standard input to end.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Rescale every line of the given text by the ratio. Lines are converted
/// independently; there is no cross-line state, and converting already
/// converted text simply scales from the numbers now present.
pub fn convert(full_text: &str, ratio: f64) -> String {
    let mut carrying = 0;

    let lines: Vec<String> = full_text
        .split('\n')
        .map(|line| {
            if !parse_number(line.trim())
                .amount
                .is_nan()
            {
                carrying += 1;
            }
            rescale_line(line, ratio)
        })
        .collect();

    debug!(
        "Scaled {} quantity line{} of {}",
        carrying,
        if carrying == 1 { "" } else { "s" },
        lines.len()
    );

    lines.join("\n")
}

/// The guarded entry point: refuses to convert at all unless the ratio is a
/// finite positive number, mirroring the validity gate in the settings.
pub fn convert_checked(full_text: &str, ratio: f64) -> Option<String> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }

    Some(convert(full_text, ratio))
}
