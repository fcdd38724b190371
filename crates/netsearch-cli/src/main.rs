//! netsearch — build, submit and inspect network search queries.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use netsearch_client::{HttpBackend, SearchSession};
use netsearch_core::ClientConfig;
use netsearch_model::{Node, Results};
use netsearch_query::{query_hash, QueryBuilder, QueryForm, SearchPlan};
use netsearch_results::ResultNormalizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

fn load_config() -> ClientConfig {
    match std::env::var("NETSEARCH_CONFIG") {
        Ok(path) if !path.trim().is_empty() => ClientConfig::load(&PathBuf::from(path)),
        _ => ClientConfig::from_env(),
    }
}

fn read_form(path: &Path) -> anyhow::Result<QueryForm> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid form JSON in {}", path.display()))
}

fn read_results(path: &Path) -> anyhow::Result<Results> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read results {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid results JSON in {}", path.display()))
}

fn session(config: ClientConfig) -> anyhow::Result<SearchSession> {
    info!("Using network search API at {}", config.base_url);
    let defaults = config.defaults.clone();
    let backend = HttpBackend::new(config)?;
    Ok(SearchSession::new(Arc::new(backend), defaults))
}

fn usage() {
    println!("netsearch — client for the network search API");
    println!();
    println!("Usage: netsearch <command> [args]");
    println!();
    println!("Commands:");
    println!("  build <form.json>          Print the query a form produces");
    println!("  inspect <results.json>     Summarize a saved /query response");
    println!("  submit <form.json>         Run a search and summarize the results");
    println!("  xrefs <namespace> <id>     Cross-references of a node");
    println!("  ground <text>              Ground free text to an entity");
    println!("  help                       Show this help message");
    println!();
    println!("Environment:");
    println!("  NETSEARCH_API_URL          API base URL (default http://localhost:8000)");
    println!("  NETSEARCH_REQUEST_TIMEOUT  HTTP timeout in seconds (default 120)");
    println!("  NETSEARCH_CONFIG           Optional JSON config file");
}

fn require(args: &[String], n: usize, usage_line: &str) -> anyhow::Result<()> {
    if args.len() < n {
        anyhow::bail!("Usage: {}", usage_line);
    }
    Ok(())
}

async fn run(args: Vec<String>) -> anyhow::Result<()> {
    let command = args.get(1).map(String::as_str).unwrap_or("help");
    match command {
        "build" => {
            require(&args, 3, "netsearch build <form.json>")?;
            let config = load_config();
            let builder =
                QueryBuilder::new(read_form(Path::new(&args[2]))?).with_defaults(config.defaults);
            let query = builder.build()?;
            report::print_build(
                &query,
                query_hash(&query),
                &SearchPlan::for_query(&query),
                &builder.disabled_fields(),
            )?;
        }
        "inspect" => {
            require(&args, 3, "netsearch inspect <results.json>")?;
            let results = ResultNormalizer::normalize(read_results(Path::new(&args[2]))?);
            report::print_results(&results);
        }
        "submit" => {
            require(&args, 3, "netsearch submit <form.json>")?;
            let form = read_form(Path::new(&args[2]))?;
            let session = session(load_config())?;
            let outcome = session.submit(form).await?;
            println!(
                "Submitted {} via {} in {}ms",
                outcome.submitted_at.to_rfc3339(),
                outcome.plan.path_algorithm,
                outcome.elapsed_ms
            );
            println!();
            report::print_results(&outcome.results);
        }
        "xrefs" => {
            require(&args, 4, "netsearch xrefs <namespace> <identifier>")?;
            let session = session(load_config())?;
            let node = Node {
                name: None,
                namespace: args[2].clone(),
                identifier: args[3].clone(),
                sign: None,
                lookup: None,
            };
            report::print_xrefs(&session.xrefs(&node).await?);
        }
        "ground" => {
            require(&args, 3, "netsearch ground <text>")?;
            let text = args[2..].join(" ");
            let session = session(load_config())?;
            report::print_grounding(&session.ground(&text).await?);
        }
        "--help" | "-h" | "help" => usage(),
        other => {
            anyhow::bail!("Unknown command: {}. Use 'netsearch help' for usage.", other);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
