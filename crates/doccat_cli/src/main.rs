//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `doccat_core` linkage with a deterministic ping/version probe.
//! - Optionally evaluate a JSON search request against a JSON document list.
//!
//! Usage: `doccat_cli [DOCUMENTS.json REQUEST.json [CONFIG.json]]`.
//! Set `DOCCAT_LOG_DIR` to an absolute path to enable file logging.

use doccat_core::{
    default_log_level, init_logging, Document, DocumentRepository, DocumentStore, SearchRequest,
    StoreConfig,
};
use log::info;
use std::error::Error;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("doccat_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("DOCCAT_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    println!("doccat_core ping={}", doccat_core::ping());
    println!("doccat_core version={}", doccat_core::core_version());

    match args.as_slice() {
        [] => Ok(()),
        [documents, request] => evaluate(documents, request, None),
        [documents, request, config] => {
            evaluate(documents, request, Some(config.as_str()))
        }
        _ => Err("usage: doccat_cli [DOCUMENTS.json REQUEST.json [CONFIG.json]]".into()),
    }
}

fn evaluate(
    documents_path: &str,
    request_path: &str,
    config_path: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let config = match config_path {
        Some(path) => StoreConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => StoreConfig::default(),
    };
    let documents: Vec<Document> = serde_json::from_str(&fs::read_to_string(documents_path)?)?;
    let request: SearchRequest = serde_json::from_str(&fs::read_to_string(request_path)?)?;

    let mut store = DocumentStore::with_config(config);
    for document in documents {
        store.save(document);
    }

    let hits = store.search(&request);
    info!(
        "event=cli_search module=cli status=ok unconstrained={} matched={}",
        request.is_unconstrained(),
        hits.len()
    );
    println!("matched={} total={}", hits.len(), store.len());
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}
