//! Repository names and owner/name identities

use std::fmt;

use crate::{Error, Result};

/// Longest name the hosting service accepts
const MAX_NAME_LEN: usize = 100;

/// A repository name that is safe to use both as an API path segment and as
/// a single directory component under the workspace root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    /// Validate and wrap a repository name
    ///
    /// Accepts ASCII alphanumerics, `-`, `_` and `.`. Rejects `.`, `..`,
    /// names ending in `.git`, and anything longer than 100 characters.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::InvalidName("name is empty".to_string()));
        }

        if input.len() > MAX_NAME_LEN {
            return Err(Error::InvalidName(format!(
                "'{}' is longer than {} characters",
                input, MAX_NAME_LEN
            )));
        }

        if input == "." || input == ".." {
            return Err(Error::InvalidName(format!("'{}' is reserved", input)));
        }

        if input.ends_with(".git") {
            return Err(Error::InvalidName(format!(
                "'{}' must not end with .git",
                input
            )));
        }

        if let Some(bad) = input
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(Error::InvalidName(format!(
                "'{}' contains disallowed character {:?}",
                input, bad
            )));
        }

        Ok(Self(input.to_string()))
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owner login plus repository name
///
/// The owner always comes from the authenticated user, never from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoIdentity {
    pub owner: String,
    pub name: String,
}

impl RepoIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
