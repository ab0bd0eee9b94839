//! Records the deployed address in a dotenv style file so that services
//! interacting with the contract can pick it up.

use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    std::{io::ErrorKind, path::Path},
};

pub const DEPLOYED_ADDRESS_KEY: &str = "DEPLOYED_CONTRACT_ADDRESS";

/// Sets `DEPLOYED_CONTRACT_ADDRESS` in the env file at `path`, replacing an
/// existing assignment and keeping all other lines. The file is created if it
/// does not exist yet.
pub async fn record_address(path: &Path, address: Address) -> Result<()> {
    let existing = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    tokio::fs::write(path, upsert(&existing, DEPLOYED_ADDRESS_KEY, &address.to_string()))
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

fn upsert(contents: &str, key: &str, value: &str) -> String {
    let assignment = format!("{key}={value}");
    let mut replaced = false;
    let mut lines: Vec<String> = contents
        .lines()
        .map(|line| {
            if assigned_key(line) == Some(key) {
                replaced = true;
                assignment.clone()
            } else {
                line.to_string()
            }
        })
        .collect();
    if !replaced {
        lines.push(assignment);
    }

    let mut updated = lines.join("\n");
    updated.push('\n');
    updated
}

fn assigned_key(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, _) = line.split_once('=')?;
    Some(key.trim())
}
