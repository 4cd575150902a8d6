//! Shared fixtures for integration tests against a wiremock backend.

use std::sync::Arc;

use ragdesk::adapters::{RecordingNotifier, ReqwestHttpClient};
use ragdesk::api::DocumentApi;
use ragdesk::config::ClientConfig;
use ragdesk::state::DocumentManager;
use ragdesk::traits::HttpClient;
use ragdesk::workspace::Workspace;
use wiremock::MockServer;

/// Config pointed at `server`, without a welcome message.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(server.uri())
        .with_welcome_message(None)
}

pub fn http_client() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestHttpClient::new())
}

pub fn workspace_for(config: &ClientConfig) -> (Workspace, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let workspace = Workspace::new(http_client(), Arc::new(notifier.clone()), config);
    (workspace, notifier)
}

pub fn documents_for(config: &ClientConfig) -> (DocumentManager, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let api = DocumentApi::new(http_client(), config);
    (DocumentManager::new(api, Arc::new(notifier.clone())), notifier)
}
