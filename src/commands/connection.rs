//! Test-connection command implementation
//!
//! Usage: concierge test-connection
//!
//! Sends a minimal completion to the configured deployment. Exit code 0 on
//! success, 1 on missing configuration or request failure.

use anyhow::Result;
use colored::Colorize;

use crate::azure::{AzureClient, AzureConfig};

/// Execute the test-connection command
pub fn execute() -> Result<()> {
    println!("{} Testing Azure OpenAI connection...", "ℹ".blue());

    let client = AzureClient::new(AzureConfig::from_env()?)?;
    let reply = client.test_connection()?;

    let config = client.config();
    println!("{} Connection successful", "✓".green());
    println!("  Endpoint:    {}", config.endpoint);
    println!("  Deployment:  {}", config.deployment);
    println!("  API version: {}", config.api_version);
    println!("  Response:    {}", reply.trim());

    Ok(())
}
