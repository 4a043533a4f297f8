//! # Ledger Snapshots
//!
//! Persists a [`MemoryLedger`] as pretty-printed JSON between CLI
//! invocations. A missing snapshot file is an empty ledger, so `prov` works
//! against a fresh path without a separate setup step.

use std::path::Path;

use anyhow::Context;

use prov_ledger::MemoryLedger;

/// Load the ledger snapshot at `path`, or an empty ledger if the file does
/// not exist yet.
pub fn load(path: &Path) -> anyhow::Result<MemoryLedger> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no snapshot found, starting empty");
        return Ok(MemoryLedger::new());
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read ledger snapshot {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("ledger snapshot {} is corrupt", path.display()))
}

/// Write the ledger snapshot to `path`.
pub fn save(path: &Path, ledger: &MemoryLedger) -> anyhow::Result<()> {
    let bytes = serde_json::to_vec_pretty(ledger).context("failed to encode ledger snapshot")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write ledger snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), "snapshot written");
    Ok(())
}
