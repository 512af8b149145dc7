//! Image command: call an image endpoint and write the returned bytes

use crate::{
    error::CliResult,
    utils::{ensure_parent_dir, ColoredOutput},
};
use anyhow::Context;
use dagpi::{Bytes, Client};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub struct ImageCommand;

impl ImageCommand {
    pub async fn run(
        client: &Client,
        name: &str,
        params: &[(String, String)],
        output: &Path,
    ) -> CliResult<()> {
        let borrowed: Vec<(&str, &str)> = params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        debug!("Calling image endpoint '{}' with {} params", name, borrowed.len());
        let bytes = client.image(name, &borrowed).await?;

        if output == Path::new("-") {
            Self::write_stdout(&bytes)?;
        } else {
            Self::write_file(output, &bytes).await?;
            println!(
                "{}",
                ColoredOutput::success(&format!(
                    "✓ Saved {} bytes to: {}",
                    bytes.len(),
                    output.display()
                ))
            );
        }

        Ok(())
    }

    fn write_stdout(bytes: &Bytes) -> CliResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(bytes)
            .and_then(|_| stdout.flush())
            .context("Failed to write image to stdout")?;
        Ok(())
    }

    async fn write_file(path: &Path, bytes: &Bytes) -> CliResult<()> {
        ensure_parent_dir(path)?;
        tokio::fs::write(path, bytes)
            .await
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        Ok(())
    }
}
