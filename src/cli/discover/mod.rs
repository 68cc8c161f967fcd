//! Discover command - runs observations through the hypothesis pipeline,
//! once or interactively

use clap::Args;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::infrastructure::services::{Discovery, DiscoveryService};

/// Characters of each passage shown in the text output
const PASSAGE_PREVIEW_CHARS: usize = 200;

/// Arguments for the discover command
#[derive(Args, Clone)]
pub struct DiscoverArgs {
    /// Observation to analyse; prompts on stdin until `quit` when omitted
    #[arg(long, short)]
    pub observation: Option<String>,

    /// Print the discovery as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the discover command
pub async fn run(args: DiscoverArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let service = crate::create_discovery_service(&config)?;

    match &args.observation {
        Some(observation) => report(&service, observation, args.json).await,
        None => interactive(&service, args.json).await,
    }
}

async fn interactive(service: &DiscoveryService, json: bool) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout
            .write_all(b"Enter an observation (or 'quit' to exit): ")
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let observation = line.trim();

        if observation.eq_ignore_ascii_case("quit") {
            break;
        }
        if observation.is_empty() {
            continue;
        }

        report(service, observation, json).await?;
        println!("{}", "-".repeat(50));
    }

    println!("Goodbye!");
    Ok(())
}

async fn report(service: &DiscoveryService, observation: &str, json: bool) -> anyhow::Result<()> {
    let discovery = service.discover(observation).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&discovery)?);
    } else {
        print!("{}", render_discovery(&discovery));
    }

    Ok(())
}

fn render_discovery(discovery: &Discovery) -> String {
    let mut terms: Vec<String> = discovery.jargon_definitions.keys().cloned().collect();
    terms.sort();

    let mut out = format!("Observation: {}\n", discovery.observation);
    out.push_str("Identified Jargon Terms:\n");
    out.push_str(&super::define::render_definitions(
        &terms,
        &discovery.jargon_definitions,
    ));
    out.push_str(&format!("Identified Context: {}\n", discovery.context));
    out.push_str(&format!("Reasoning:\n{}\n", discovery.reasoning));
    out.push_str(&format!("Hypothesis: {}\n", discovery.hypothesis));
    out.push_str("Retrieved Passages:\n");

    for (i, passage) in discovery.passages.iter().enumerate() {
        let preview: String = passage.chars().take(PASSAGE_PREVIEW_CHARS).collect();
        out.push_str(&format!("Passage {}: {}...\n", i + 1, preview));
    }

    out
}
