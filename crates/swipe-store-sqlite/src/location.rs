//! Interpretation of the `DATABASE_URL` setting.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
  Memory,
  File(PathBuf),
}

impl DatabaseLocation {
  /// Accepts a bare path, `sqlite://path`, `sqlite:path`, `:memory:` or
  /// `sqlite::memory:`. URL query strings (`?mode=rwc`) are ignored and a
  /// leading `~/` is expanded to `$HOME`.
  pub fn parse(url: &str) -> Result<Self> {
    let url = url.trim();
    let rest = url
      .strip_prefix("sqlite://")
      .or_else(|| url.strip_prefix("sqlite:"))
      .unwrap_or(url);
    let rest = rest.split_once('?').map_or(rest, |(path, _)| path);

    match rest {
      "" => Err(Error::EmptyDatabaseUrl),
      ":memory:" => Ok(Self::Memory),
      path => Ok(Self::File(expand_tilde(Path::new(path)))),
    }
  }
}

impl std::fmt::Display for DatabaseLocation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Memory => f.write_str(":memory:"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
