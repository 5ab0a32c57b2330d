use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

pub const STORE_DIR_ENV: &str = "CONTEXT_STORE_DIR";
pub const DEFAULT_STORE_DIR_NAME: &str = "contexts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `CONTEXT_STORE_DIR`
    Env,
    /// Next to the running executable.
    ExeDir,
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "{STORE_DIR_ENV}"),
            Self::ExeDir => f.write_str("executable dir"),
        }
    }
}

/// Store location, resolved once at startup and handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub source: RootSource,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        if let Some(raw) = env_store_dir_override() {
            let cwd = env::current_dir().context("failed to read current directory")?;
            return Ok(Self {
                root: absolutize(&cwd, Path::new(&raw)),
                source: RootSource::Env,
            });
        }

        let exe = env::current_exe().context("failed to locate the running executable")?;
        Ok(Self {
            root: default_root_for_exe(&exe)?,
            source: RootSource::ExeDir,
        })
    }
}

fn env_store_dir_override() -> Option<String> {
    let value = env::var(STORE_DIR_ENV).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn default_root_for_exe(exe: &Path) -> Result<PathBuf> {
    let dir = exe
        .parent()
        .with_context(|| format!("executable path {} has no parent", exe.display()))?;
    Ok(dir.join(DEFAULT_STORE_DIR_NAME))
}
