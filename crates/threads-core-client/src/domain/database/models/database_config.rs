// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

pub struct DatabaseConfig {
    /// The connection string. Holds credentials, so it is never logged.
    pub url: Option<Secret<String>>,
    /// Reject queries on fields that are not part of the schema.
    pub strict_query: bool,
}

impl DatabaseConfig {
    pub const URL_ENV_VAR: &'static str = "MONGODB_URL";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(Secret::new(url.into())),
            strict_query: true,
        }
    }

    /// Reads the connection string from `MONGODB_URL`. An unset or empty
    /// variable leaves the config without URL.
    pub fn from_env() -> Self {
        let url = std::env::var(Self::URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .map(Secret::new);

        Self {
            url,
            strict_query: true,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            strict_query: true,
        }
    }
}
