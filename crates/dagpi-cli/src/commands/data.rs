//! Data command: call a JSON endpoint and print or save the body

use crate::{
    cli::OutputFormat,
    error::CliResult,
    utils::{ensure_parent_dir, ColoredOutput},
};
use dagpi::{Client, JsonMap};
use serde_json::Value as JsonValue;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub struct DataCommand;

impl DataCommand {
    pub async fn run(
        client: &Client,
        name: &str,
        params: &[(String, String)],
        format: OutputFormat,
        output_file: Option<&Path>,
    ) -> CliResult<()> {
        let start_time = Instant::now();
        let map = Self::fetch(client, name, params).await?;
        info!(
            "Fetched data endpoint '{}' in {}ms",
            name,
            start_time.elapsed().as_millis()
        );

        let rendered = Self::render(&map, format)?;

        if let Some(path) = output_file {
            ensure_parent_dir(path)?;
            tokio::fs::write(path, &rendered).await?;
            println!(
                "{}",
                ColoredOutput::success(&format!("✓ Output saved to: {}", path.display()))
            );
        } else {
            println!("{}", rendered);
        }

        Ok(())
    }

    async fn fetch(
        client: &Client,
        name: &str,
        params: &[(String, String)],
    ) -> CliResult<JsonMap> {
        let borrowed: Vec<(&str, &str)> = params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        debug!("Calling data endpoint '{}' with {} params", name, borrowed.len());
        Ok(client.data(name, &borrowed).await?)
    }

    /// Render a data body; the table view lists top-level fields one per line.
    pub fn render(map: &JsonMap, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Table => {
                let width = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
                let lines: Vec<String> = map
                    .iter()
                    .map(|(key, value)| {
                        let shown = match value {
                            JsonValue::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        format!("{:<width$}  {}", key, shown, width = width)
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            _ => format.format_json(&JsonValue::Object(map.clone())),
        }
    }
}
