//! Loads compiled contracts from Hardhat style JSON artifacts.

use {
    crate::traits::{ArtifactSource, ContractFactory},
    alloy::primitives::Bytes,
    anyhow::{Context, Result, ensure},
    serde::Deserialize,
    std::path::PathBuf,
};

/// The subset of an artifact needed for deployment. Other fields like `abi`
/// or `deployedBytecode` are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: String,
    bytecode: String,
}

/// Reads the contract factory from a single artifact file on disk.
#[derive(Debug, Clone)]
pub struct ArtifactFile {
    path: PathBuf,
}

impl ArtifactFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ArtifactSource for ArtifactFile {
    async fn contract_factory(&self, name: &str) -> Result<ContractFactory> {
        let contents = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read artifact {}", self.path.display()))?;
        parse_artifact(&contents, name)
            .with_context(|| format!("invalid artifact {}", self.path.display()))
    }
}

fn parse_artifact(contents: &[u8], name: &str) -> Result<ContractFactory> {
    let artifact: Artifact = serde_json::from_slice(contents).context("malformed artifact JSON")?;
    ensure!(
        artifact.contract_name == name,
        "artifact contains contract {:?} but {:?} was requested",
        artifact.contract_name,
        name,
    );
    let bytecode: Bytes = artifact
        .bytecode
        .parse()
        .context("bytecode is not valid hex")?;
    // Abstract contracts and interfaces compile to empty bytecode.
    ensure!(!bytecode.is_empty(), "contract {name} has no bytecode");

    Ok(ContractFactory {
        name: artifact.contract_name,
        bytecode,
    })
}
