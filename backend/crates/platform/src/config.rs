//! Configuration helpers
//!
//! Environment variable lookup with optional defaults, plus `.env` loading.

use std::env::{self, VarError};
use std::path::{Path, PathBuf};

use kernel::error::common_error::ResultExt;
use kernel::error::infrastructure_error::InfrastructureError;

/// Return the value of an environment variable
///
/// ## Arguments
/// * `name` - the variable to read
/// * `default` - fallback used when the variable is not set
///
/// ## Returns
/// * `Ok(String)` - the variable's value, or the default
/// * `Err(InfrastructureError)` - unset with no default, or not valid unicode
///
/// ## Examples
/// ```rust
/// use platform::config::get_env_var;
///
/// let value = get_env_var("PLATFORM_DOC_SURELY_UNSET", Some("fallback")).unwrap();
/// assert_eq!(value, "fallback");
/// ```
pub fn get_env_var(name: &str, default: Option<&str>) -> Result<String, InfrastructureError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => default
            .map(str::to_owned)
            .ok_or_else(|| InfrastructureError::missing_env_var(name)),
        Err(err) => Err(err.into()),
    }
}

/// Load a `.env` file from the working directory or its ancestors
///
/// Variables already present in the process environment win.
///
/// ## Returns
/// * `Ok(true)` - a file was found and loaded
/// * `Ok(false)` - no `.env` file exists
/// * `Err(InfrastructureError)` - the file exists but could not be read or parsed
pub fn load_dotenv() -> Result<bool, InfrastructureError> {
    dotenv_loaded(dotenvy::dotenv())
}

fn dotenv_loaded(result: Result<PathBuf, dotenvy::Error>) -> Result<bool, InfrastructureError> {
    match result {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(true)
        }
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(err).map_infra_err("Failed to load .env file"),
    }
}

/// Load a specific env file
///
/// Same precedence rules as [`load_dotenv`]; a missing file is an error here.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_infra_err(format!("Failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded env file");
    Ok(())
}
