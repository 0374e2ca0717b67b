// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;
use secrecy::ExposeSecret;
use tracing::{error, info, warn};

use crate::domain::database::models::{ConnectionState, DatabaseConfig};
use crate::domain::database::services::DatabaseDriver;

/// Establishes the database connection at most once.
///
/// The connector is created and kept by the code bootstrapping the process.
/// Calling `connect` again after a successful connection is a no-op.
pub struct DatabaseConnector {
    driver: Arc<dyn DatabaseDriver>,
    config: DatabaseConfig,
    state: Mutex<ConnectionState>,
}

impl DatabaseConnector {
    pub fn new(driver: Arc<dyn DatabaseDriver>, config: DatabaseConfig) -> Self {
        Self {
            driver,
            config,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.lock()
    }

    /// Connects unless the connection is already established or being
    /// established. A missing URL or a failed attempt is logged and leaves the
    /// connector disconnected.
    pub async fn connect(&self) -> ConnectionState {
        self.driver.set_strict_query(self.config.strict_query);

        let Some(url) = self.config.url.as_ref() else {
            warn!(
                "Database URL not found. Set {} to connect.",
                DatabaseConfig::URL_ENV_VAR
            );
            return self.state();
        };

        {
            let mut state = self.state.lock();
            match *state {
                ConnectionState::Connected => {
                    info!("Already connected to database.");
                    return ConnectionState::Connected;
                }
                ConnectionState::Connecting => {
                    info!("Database connection is already being established.");
                    return ConnectionState::Connecting;
                }
                ConnectionState::Disconnected => *state = ConnectionState::Connecting,
            }
        }

        let new_state = match self.driver.connect(url.expose_secret()).await {
            Ok(()) => {
                info!("Connected to database.");
                ConnectionState::Connected
            }
            Err(err) => {
                error!("Failed to connect to database. Reason: {:?}", err);
                ConnectionState::Disconnected
            }
        };

        *self.state.lock() = new_state;
        new_state
    }
}
