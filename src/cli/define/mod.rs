//! Define command - resolves jargon terms through the glossary, summary
//! lookups and generative fallback

use clap::Args;
use tracing::warn;

use crate::domain::jargon::{is_valid_term, MAX_TERM_WORDS};
use crate::domain::{DefinitionRecord, JargonDefinitions};

/// Arguments for the define command
#[derive(Args, Clone)]
pub struct DefineArgs {
    /// Terms to resolve
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Print the definitions as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the define command
pub async fn run(args: DefineArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let (terms, skipped) = partition_terms(&args.terms);
    for term in &skipped {
        warn!(term = %term, max_words = MAX_TERM_WORDS, "Skipping term that is blank or too long");
    }

    let resolver = crate::create_jargon_resolver(&config)?;
    let definitions = resolver.resolve(&terms).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    print!("{}", render_definitions(&terms, &definitions));
    Ok(())
}

/// Splits raw terms into resolvable ones and ones that are blank or too long
fn partition_terms(terms: &[String]) -> (Vec<String>, Vec<String>) {
    terms.iter().cloned().partition(|term| is_valid_term(term))
}

/// Renders definitions in the order the terms were given, skipping duplicates
pub(crate) fn render_definitions(terms: &[String], definitions: &JargonDefinitions) -> String {
    let mut out = String::new();
    let mut seen = std::collections::HashSet::new();

    for term in terms {
        if !seen.insert(term.as_str()) {
            continue;
        }

        out.push_str(&format!("  - {}:\n", term));
        match definitions.get(term) {
            Some(record) if !record.is_empty() => out.push_str(&render_record(record)),
            _ => out.push_str("    (no definition found)\n"),
        }
    }

    out
}

fn render_record(record: &DefinitionRecord) -> String {
    record
        .iter()
        .map(|(source, definition)| format!("    {}: {}\n", source, definition))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DefinitionSource;
    use std::collections::HashMap;

    #[test]
    fn test_render_definitions() {
        let terms = vec![
            "AI".to_string(),
            "unknown".to_string(),
            "AI".to_string(),
        ];
        let definitions = HashMap::from([
            (
                "AI".to_string(),
                DefinitionRecord::from_source(DefinitionSource::Local, "Artificial Intelligence"),
            ),
            ("unknown".to_string(), DefinitionRecord::new()),
        ]);

        let rendered = render_definitions(&terms, &definitions);

        assert_eq!(
            rendered,
            "  - AI:\n    local: Artificial Intelligence\n  - unknown:\n    (no definition found)\n"
        );
    }

    #[test]
    fn test_partition_terms() {
        let raw = vec![
            "overfishing".to_string(),
            "four words are too".to_string(),
            "  ".to_string(),
            "marine biodiversity".to_string(),
        ];

        let (terms, skipped) = partition_terms(&raw);

        assert_eq!(terms, vec!["overfishing", "marine biodiversity"]);
        assert_eq!(skipped, vec!["four words are too", "  "]);
    }
}
