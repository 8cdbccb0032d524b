// Entrypoint for the README generator.
// - Builds the GitHub client from the compiled defaults and hands it to the
//   UI flow, which runs exactly once.
// - Any failure is printed by anyhow and the process exits non-zero.

use anyhow::Context;
use readmegen_cli::{api::GitHubClient, config::Config, ui};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    let client =
        GitHubClient::new(&config.api_base_url).context("Failed to build HTTP client")?;

    ui::run(&client, &config)?;
    Ok(())
}
