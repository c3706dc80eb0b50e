use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::config::Config;
use crate::lsp::backend::Backend;

/// Start the LSP server
pub async fn serve(config: Config) -> Result<()> {
    log::info!("starting jshint-language-server");

    let (service, socket) =
        LspService::build(move |client| Backend::new(client, config.clone())).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
