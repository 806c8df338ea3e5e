use cloudns_dns01_domain::{Credentials, DomainError, RawCredentials};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Loads and validates a ClouDNS credentials file.
///
/// Warns when the file is readable by group or others.
pub fn load_credentials(path: &Path) -> Result<Credentials, DomainError> {
    let source = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidCredentials(format!("Failed to read credentials file {source}: {e}"))
    })?;

    #[cfg(unix)]
    warn_on_permissive_mode(path);

    let credentials = RawCredentials::parse(&content, &source)?.validate(&source)?;
    debug!(
        path = %source,
        identity = credentials.identity().param_name(),
        "Loaded ClouDNS credentials"
    );
    Ok(credentials)
}

#[cfg(unix)]
fn warn_on_permissive_mode(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{mode:o}"),
                "Unsafe permissions on credentials configuration file"
            );
        }
    }
}
