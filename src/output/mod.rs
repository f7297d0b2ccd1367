//! Output generation for the portions CLI application

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Write the converted document to standard output, or to the given target
/// file when one was requested.
pub fn emit(target: Option<&Path>, text: &str) {
    match target {
        Some(filename) => {
            info!("Writing converted recipe to {}", filename.display());

            std::fs::write(filename, text).expect("Failed writing output file");
        }
        None => {
            debug!("Writing converted recipe to standard output");

            let stdout = std::io::stdout();
            let mut handle = stdout.lock();

            handle
                .write_all(text.as_bytes())
                .expect("Write document to standard output");

            // end with a newline unless the document already carries one
            if !text.ends_with('\n') {
                handle
                    .write_all(b"\n")
                    .expect("Write trailing newline to standard output");
            }
        }
    }
}
