//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// GitHub answers 401 for a rejected or missing token
pub(crate) fn is_unauthorized(status: u16) -> bool {
    status == 401
}

/// GitHub answers 404 for missing resources, including private ones the
/// token cannot see
pub(crate) fn is_not_found(status: u16) -> bool {
    status == 404
}

impl From<Error> for repokit_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(octocrab::Error::GitHub { source, .. }) => {
                if is_unauthorized(source.status_code.as_u16()) {
                    repokit_core::Error::Auth(source.message)
                } else {
                    repokit_core::Error::Remote(source.message)
                }
            }
            // Anything that is not a GitHub response failed in transport
            Error::Api(other) => repokit_core::Error::Network(other.to_string()),
            Error::Auth(msg) => repokit_core::Error::Auth(msg),
            Error::Parse(msg) => repokit_core::Error::Remote(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        assert!(is_unauthorized(401));
        assert!(!is_unauthorized(403));
        assert!(!is_unauthorized(404));
    }

    #[test]
    fn test_not_found_status() {
        assert!(is_not_found(404));
        assert!(!is_not_found(401));
        assert!(!is_not_found(422));
    }

    #[test]
    fn test_into_core_error() {
        let core: repokit_core::Error = Error::Auth("Invalid GitHub token".to_string()).into();
        assert!(matches!(core, repokit_core::Error::Auth(_)));

        let core: repokit_core::Error = Error::Parse("no clone_url".to_string()).into();
        assert!(matches!(core, repokit_core::Error::Remote(_)));
    }
}
