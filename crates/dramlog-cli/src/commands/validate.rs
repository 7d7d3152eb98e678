use anyhow::Result;

use dramlog_store::Store;

/// Validate the tasting corpus. Returns false when any file failed to
/// parse so the caller can exit non-zero.
pub fn run_validate(store: &Store) -> Result<bool> {
    let report = store.validate_tastings()?;

    println!("\n🔍 Validated {} tasting files", report.scanned);

    if report.is_clean() {
        println!("  All files parse.");
        return Ok(true);
    }

    println!("  {} file(s) failed:\n", report.failures.len());
    for (path, reason) in &report.failures {
        println!("  ✗ {}", path.display());
        println!("      {reason}");
    }

    Ok(false)
}
