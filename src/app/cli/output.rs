//! Terminal rendering of generated file sets.

use std::path::Path;

use crate::adapters::FilesystemExporter;
use crate::domain::{AppError, FileOutcome, FileSet};

/// Print every entry with a file-name header, in plan order.
///
/// Generated content is printed verbatim; failed entries show their marker so
/// a partial failure is visible per file instead of silently shrinking the
/// set.
pub fn print_file_set(files: &FileSet) {
    for (key, outcome) in files.iter() {
        println!();
        println!("===== {} =====", key.file_name());
        match outcome {
            FileOutcome::Generated(content) => println!("{}", content),
            FileOutcome::Failed(reason) => println!("❌ Generation failed: {}", reason),
        }
    }
}

pub fn print_summary(files: &FileSet) {
    let failed = files.failed_count();
    let generated = files.len() - failed;

    println!();
    if failed == 0 {
        println!("✅ Generated {} file(s).", generated);
    } else if generated == 0 {
        println!("❌ All {} file(s) failed to generate.", failed);
    } else {
        println!("⚠️ Generated {} file(s); {} failed.", generated, failed);
    }
}

/// Export the set to `dir` and report what was written and what was skipped.
pub fn export_file_set(files: &FileSet, dir: &Path) -> Result<(), AppError> {
    let exporter = FilesystemExporter::new(dir);
    let written = exporter.export(files)?;

    for path in &written {
        println!("✅ Wrote {}", path.display());
    }
    for (key, outcome) in files.iter() {
        if outcome.is_failed() {
            println!("⚠️ Skipped {} (generation failed)", key.file_name());
        }
    }

    Ok(())
}
