use std::sync::Arc;

use anyhow::Context;
use ava_auth::{CallContext, FileStore, SessionStore};
use ava_config::AvaConfig;
use ava_gateway::ApiClient;

use crate::cli::GlobalFlags;
use crate::notify::TerminalNotifier;

/// Cookie header used as the incoming request in `--server` mode.
pub const SESSION_COOKIE_ENV: &str = "AVA_SESSION_COOKIE";

/// Everything a command handler needs: the API client, the local session
/// store, and the call context derived from the global flags.
pub struct AppContext {
    pub client: ApiClient,
    pub store: Arc<FileStore>,
    pub call: CallContext,
    pub notifier: Arc<TerminalNotifier>,
}

impl AppContext {
    pub fn init(config: AvaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let dir = config
            .session
            .resolved_dir()
            .context("cannot determine the session directory; set AVA_SESSION__DIR")?;
        let store = Arc::new(FileStore::new(dir));

        let call = if flags.server {
            CallContext::server(std::env::var(SESSION_COOKIE_ENV).ok())
        } else {
            let shared: Arc<dyn SessionStore> = store.clone();
            CallContext::browser(shared)
        };

        let notifier = Arc::new(TerminalNotifier::new(flags.quiet));
        let client = ApiClient::new(config.api)
            .context("failed to build the HTTP client")?
            .with_notifier(notifier.clone());

        tracing::debug!(
            context = %call.execution(),
            session_dir = %store.dir().display(),
            "application context ready"
        );
        Ok(Self {
            client,
            store,
            call,
            notifier,
        })
    }
}

/// Warn once when neither base URL is configured; every API call will fail.
pub fn warn_unconfigured(config: &AvaConfig) {
    if !config.api.is_configured() {
        tracing::warn!(
            "no API base URL configured; set PUBLIC_API_URL or AVA_API__PUBLIC_URL"
        );
    }
}
