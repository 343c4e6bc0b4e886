//! Remote target value object - where `deploy` mirrors the output tree

use std::str::FromStr;

use crate::error::TaskError;

/// A remote destination addressed by host and path
///
/// Format: "host:path" or "user@host:path". A bare host means the remote
/// login directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    host: String,
    path: String,
}

impl RemoteTarget {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Destination argument for rsync/scp
    pub fn destination(&self) -> String {
        format!("{}:{}", self.host, self.path)
    }
}

impl FromStr for RemoteTarget {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TaskError::InvalidRemote {
            remote: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty"));
        }

        let (host, path) = match trimmed.split_once(':') {
            Some((h, p)) => (h, if p.is_empty() { "." } else { p }),
            None => (trimmed, "."),
        };

        if host.is_empty() {
            return Err(invalid("missing host"));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(invalid("host contains whitespace"));
        }
        if host.starts_with('-') {
            return Err(invalid("host starts with '-'"));
        }
        if host.ends_with('@') {
            return Err(invalid("missing host after user"));
        }
        // rsync and scp treat anything with a '/' before the colon as local
        if host.contains('/') {
            return Err(invalid("looks like a local path, expected host:path"));
        }

        Ok(Self::new(host, path))
    }
}

impl std::fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.destination())
    }
}
