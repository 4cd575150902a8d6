//! The chat page: file selection next to the conversation.

use std::sync::Arc;

use crate::api::DocumentApi;
use crate::chat::{ChatController, SubmitOutcome};
use crate::config::ClientConfig;
use crate::error::DeskResult;
use crate::state::{DocumentManager, SelectionModel};
use crate::traits::{HttpClient, Notifier};

/// Selection and chat sharing one backend and one notifier.
///
/// Each submit takes a fresh snapshot of the selected file ids, so toggling
/// files while a reply streams never changes the request already sent.
pub struct Workspace {
    api: DocumentApi,
    notifier: Arc<dyn Notifier>,
    selection: SelectionModel,
    chat: ChatController,
}

impl Workspace {
    pub fn new(
        http: Arc<dyn HttpClient>,
        notifier: Arc<dyn Notifier>,
        config: &ClientConfig,
    ) -> Self {
        let api = DocumentApi::new(http, config);
        let chat = ChatController::new(api.clone(), Arc::clone(&notifier), config);
        Self {
            api,
            notifier,
            selection: SelectionModel::new(),
            chat,
        }
    }

    pub async fn refresh_files(&mut self) -> DeskResult<usize> {
        self.selection
            .refresh(&self.api, self.notifier.as_ref())
            .await
    }

    pub fn submit(&mut self, query: &str) -> SubmitOutcome {
        let selected = self.selection.selection_snapshot();
        self.chat.submit(query, &selected)
    }

    /// A document manager on the same backend.
    pub fn documents(&self) -> DocumentManager {
        DocumentManager::new(self.api.clone(), Arc::clone(&self.notifier))
    }

    pub fn api(&self) -> &DocumentApi {
        &self.api
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatController {
        &mut self.chat
    }
}
