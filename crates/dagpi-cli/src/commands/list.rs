//! List command for the endpoint catalog

use crate::{
    cli::OutputFormat,
    error::CliResult,
    utils::{truncate_text, ColoredOutput},
};
use dagpi::endpoints;
use dagpi::{Endpoint, EndpointKind};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

pub struct ListCommand;

impl ListCommand {
    pub fn run(kind: Option<EndpointKind>, format: OutputFormat) -> CliResult<()> {
        debug!("Listing endpoints with kind filter: {:?}", kind);

        let selected = Self::select(kind);

        match format {
            OutputFormat::Table => Self::display_table(&selected),
            _ => println!("{}", format.format_json(&Self::endpoints_to_json(&selected))?),
        }

        Ok(())
    }

    fn select(kind: Option<EndpointKind>) -> Vec<&'static Endpoint> {
        match kind {
            Some(kind) => endpoints::of_kind(kind).iter().collect(),
            None => endpoints::all().collect(),
        }
    }

    fn display_table(selected: &[&Endpoint]) {
        if selected.is_empty() {
            println!("{}", ColoredOutput::dim("No endpoints found."));
            return;
        }

        println!(
            "{}",
            ColoredOutput::highlight(&format!(
                "{:<6} {:<18} {:<30} {:<30}",
                "KIND", "NAME", "PARAMETERS", "DESCRIPTION"
            ))
        );
        println!("{}", "─".repeat(86));

        for endpoint in selected {
            println!(
                "{:<6} {:<18} {:<30} {:<30}",
                endpoint.kind.as_str(),
                endpoint.name,
                truncate_text(&endpoint.params.join(", "), 30),
                truncate_text(endpoint.description, 30)
            );
        }

        println!();
        println!(
            "{}",
            ColoredOutput::info(&format!("Total: {} endpoints", selected.len()))
        );
    }

    fn endpoints_to_json(selected: &[&Endpoint]) -> JsonValue {
        JsonValue::Array(
            selected
                .iter()
                .map(|endpoint| {
                    json!({
                        "name": endpoint.name,
                        "kind": endpoint.kind.as_str(),
                        "path": endpoint.path,
                        "params": endpoint.params,
                        "description": endpoint.description,
                    })
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_filters_by_kind() {
        let data = ListCommand::select(Some(EndpointKind::Data));
        assert!(!data.is_empty());
        assert!(data.iter().all(|e| e.kind == EndpointKind::Data));

        let all = ListCommand::select(None);
        let images = ListCommand::select(Some(EndpointKind::Image));
        assert_eq!(all.len(), data.len() + images.len());
    }

    #[test]
    fn test_endpoints_to_json() {
        let selected = vec![&endpoints::image::PRIDE];
        let value = ListCommand::endpoints_to_json(&selected);

        assert_eq!(value[0]["name"], "pride");
        assert_eq!(value[0]["kind"], "image");
        assert_eq!(value[0]["path"], "/image/pride/");
        assert_eq!(value[0]["params"], json!(["url", "flag"]));
    }
}
