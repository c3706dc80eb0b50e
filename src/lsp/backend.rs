use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::checker::Checker;
use crate::config::Config;
use crate::lsp::document::DocumentState;
use crate::lsp::handlers::HandleDiagnostics;

/// The main LSP backend that holds state and implements the Language Server Protocol
pub struct Backend {
    pub client: Client,
    pub checker: Arc<OnceCell<Option<Checker>>>,
    pub documents: Arc<Mutex<HashMap<Url, DocumentState>>>,
    pub config: Config,
}

impl Backend {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            checker: Arc::new(OnceCell::new()),
            documents: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Checker handle, loaded on first use and cached for the process
    /// lifetime. A failed load is cached too, so later validations fail
    /// closed to empty diagnostics instead of retrying the load.
    pub async fn checker(&self) -> Option<&Checker> {
        self.checker
            .get_or_init(|| async {
                match Checker::locate(&self.config).await {
                    Ok(checker) => Some(checker),
                    Err(e) => {
                        log::warn!("checker unavailable, diagnostics disabled: {e:#}");
                        None
                    }
                }
            })
            .await
            .as_ref()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(
        &self,
        _: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "jshint-language-server initialized")
            .await;
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        Ok(())
    }

    // Store opened documents for validation
    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri.clone();
        let content = params.text_document.text;

        let mut docs = self.documents.lock().await;
        docs.insert(uri.clone(), DocumentState { content });
        drop(docs); // Release the lock before calling publish_diagnostics

        // Publish diagnostics for the opened document
        self.publish_diagnostics(uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.clone();
        if let Some(change) = params.content_changes.into_iter().last() {
            let mut docs = self.documents.lock().await;
            docs.insert(
                uri.clone(),
                DocumentState {
                    content: change.text,
                },
            );
            drop(docs); // Release the lock before calling publish_diagnostics

            // Publish updated diagnostics
            self.publish_diagnostics(uri).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        let mut docs = self.documents.lock().await;
        docs.remove(&uri);
        drop(docs);

        // Clear any annotations still shown for the closed document
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }
}
