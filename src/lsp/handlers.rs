use tower_lsp::lsp_types::*;

use crate::lint::validate;
use crate::lsp::backend::Backend;
use crate::normalize;

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
    fn create_lsp_diagnostic(&self, annotation: normalize::LintAnnotation) -> Diagnostic;
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Publish diagnostics for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let content = match docs.get(&uri) {
            Some(state) => state.content.clone(),
            None => return,
        };
        drop(docs); // Release the lock across the checker run

        // An unavailable checker publishes an empty set; the editor must
        // never see an error for a failed validation
        let annotations = match self.checker().await {
            Some(checker) => validate(checker, &content, &self.config.check_options()).await,
            None => Vec::new(),
        };

        let diagnostics = annotations
            .into_iter()
            .map(|annotation| self.create_lsp_diagnostic(annotation))
            .collect();

        // Publish the diagnostics
        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }

    fn create_lsp_diagnostic(&self, annotation: normalize::LintAnnotation) -> Diagnostic {
        let severity = match annotation.severity {
            normalize::Severity::Error => DiagnosticSeverity::ERROR,
            normalize::Severity::Warning => DiagnosticSeverity::WARNING,
        };

        Diagnostic::new(
            Range::new(
                Position::new(annotation.from.line, annotation.from.character),
                Position::new(annotation.to.line, annotation.to.character),
            ),
            Some(severity),
            None,
            Some("jshint-ls".to_string()),
            annotation.message,
            None,
            None,
        )
    }
}
