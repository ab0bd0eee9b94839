//! Trait definitions for external system boundaries.
//!
//! These traits abstract the build artifacts and the blockchain node so the
//! deployment workflow can be unit tested with mocks.

use {
    alloy::primitives::{Address, B256, Bytes},
    anyhow::Result,
};

/// Deployable descriptor of a compiled contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFactory {
    pub name: String,
    /// Creation code that gets sent as the input of the deployment
    /// transaction. Never empty.
    pub bytecode: Bytes,
}

/// A deployment transaction that was accepted by the node but is not
/// confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeployment {
    pub contract: String,
    pub tx_hash: B256,
}

/// A confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub contract: String,
    pub address: Address,
    pub tx_hash: B256,
    pub block_number: Option<u64>,
}

/// Abstracts the lookup of compiled contracts.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Resolves the deployable descriptor of the contract with the given
    /// name.
    async fn contract_factory(&self, name: &str) -> Result<ContractFactory>;
}

/// Abstracts blockchain write operations needed to deploy a contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Network: Send + Sync {
    /// Submits the contract creation transaction without waiting for it to
    /// be mined.
    async fn submit(&self, factory: &ContractFactory) -> Result<PendingDeployment>;

    /// Waits until the deployment transaction is considered final.
    ///
    /// Fails if the transaction did not get mined in time, reverted or did
    /// not create a contract.
    async fn confirm(&self, pending: PendingDeployment) -> Result<Deployment>;
}
