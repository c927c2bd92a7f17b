use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bookling_core::gateway::Gateway;
use bookling_core::session::{PersistentSessionStore, SessionContext};
use bookling_infrastructure::{BooklingPaths, ConfigService, FileDurableStore, HttpGateway};

use super::logging::{self, LogGuard};
use super::state::ApiHandle;
use crate::app::AppState;

/// Options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    pub api_url: Option<String>,
    pub home: Option<PathBuf>,
    pub verbose: bool,
    /// The command talks to the server, so an unusable API address is fatal.
    pub require_api: bool,
}

pub struct AppBootstrap {
    pub app_state: AppState,
    pub log_guard: LogGuard,
}

impl AppBootstrap {
    /// Wires configuration, logging, the session and the gateway.
    ///
    /// An unreadable config file is fatal. So is a missing or malformed API
    /// address when `require_api` is set; otherwise the error is kept in the
    /// state for commands that only look at it, such as `config`.
    pub fn initialize(options: BootstrapOptions) -> Result<Self> {
        let paths = BooklingPaths::new(options.home);
        let config_service = ConfigService::new(paths.clone());
        let config = config_service
            .load_root()
            .context("Failed to load configuration")?;

        let log_guard = logging::init(
            &config.logging.level,
            paths.logs_dir().ok().as_deref(),
            options.verbose,
        );
        tracing::info!("[Bootstrap] Starting bookling {}", env!("CARGO_PKG_VERSION"));

        let storage = FileDurableStore::from_paths(&paths)
            .context("Failed to locate session storage")?;
        let store = PersistentSessionStore::new(Arc::new(storage));
        let session = Arc::new(SessionContext::new(Arc::new(store)));

        let api = config_service
            .api_config(&config, options.api_url.as_deref())
            .and_then(HttpGateway::new)
            .map(|gateway| {
                tracing::info!("[Bootstrap] API base address: {}", gateway.base_url());
                ApiHandle {
                    base_url: gateway.base_url().to_string(),
                    gateway: Arc::new(gateway) as Arc<dyn Gateway>,
                }
            });
        if let Err(e) = &api {
            if options.require_api {
                tracing::error!("[Bootstrap] API gateway unavailable: {}", e);
                return Err(anyhow::Error::new(e.clone()).context("Invalid API configuration"));
            }
            tracing::warn!("[Bootstrap] API gateway unavailable: {}", e);
        }

        Ok(Self {
            app_state: AppState::new(paths, config, session, api),
            log_guard,
        })
    }
}
