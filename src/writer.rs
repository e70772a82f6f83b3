use {
    crate::payload::{NGINX_SITE_CONFIG, TARGET_PATH},
    anyhow::{Context, Result},
    std::{
        fs::File,
        io::Write,
        path::Path,
    },
    tracing::{debug, info},
};

pub const SUCCESS_MESSAGE: &str = "Nginx config written successfully";

/// Overwrites the live nginx site file with the embedded configuration.
pub fn write_config() -> Result<()> {
    write_config_to(Path::new(TARGET_PATH), &mut std::io::stdout().lock())
}

/// Overwrites `path` with the embedded configuration, then reports success on `out`.
///
/// Nothing is written to `out` when the file cannot be written.
pub fn write_config_to(path: &Path, out: &mut impl Write) -> Result<()> {
    persist(path, NGINX_SITE_CONFIG)?;
    writeln!(out, "{}", SUCCESS_MESSAGE).context("Failed to report success")?;
    Ok(())
}

/// Truncates `path` (creating it if missing), writes `payload` in place and syncs it to disk.
///
/// The parent directory must already exist.
pub fn persist(path: &Path, payload: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = payload.len(), "writing site config");
    let mut file = File::create(path)
        .with_context(|| format!("Failed to open config file for writing: {}", path.display()))?;
    file.write_all(payload.as_bytes())
        .with_context(|| format!("Failed to write config file to: {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync config file: {}", path.display()))?;
    info!(path = %path.display(), "site config written");
    Ok(())
}
