use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// The image archives are produced by `docker save` during packaging; build.rs
// copies them from assets/images/ into OUT_DIR (or substitutes a stub for
// builds without the artifacts).
pub static BACKEND_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/backend.tar"));
pub static FRONTEND_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/frontend.tar"));

pub static COMPOSE_DESCRIPTOR: &[u8] = include_bytes!("../assets/docker-compose.yml");

/// Write an embedded blob verbatim, creating or truncating the target file.
/// The handle is dropped on every exit path; a write error aborts the run.
pub fn write_asset(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
