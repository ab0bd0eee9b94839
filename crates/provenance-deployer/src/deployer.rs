use {
    crate::{
        error::DeploymentError,
        traits::{ArtifactSource, Deployment, Network},
    },
    std::sync::Arc,
};

/// Name of the contract this tool deploys.
pub const CONTRACT_NAME: &str = "Provenance";

/// Deploys a single contract and waits for the deployment to be confirmed.
///
/// Every step is attempted at most once per [`Deployer::run`] and the first
/// failure aborts the workflow. There are no retries.
pub struct Deployer {
    contract: &'static str,
    artifacts: Arc<dyn ArtifactSource>,
    network: Arc<dyn Network>,
}

impl Deployer {
    pub fn new(artifacts: Arc<dyn ArtifactSource>, network: Arc<dyn Network>) -> Self {
        Self {
            contract: CONTRACT_NAME,
            artifacts,
            network,
        }
    }

    pub async fn run(&self) -> Result<Deployment, DeploymentError> {
        let contract = self.contract;

        tracing::debug!(contract, "resolving contract factory");
        let factory = self
            .artifacts
            .contract_factory(contract)
            .await
            .map_err(|source| DeploymentError::FactoryResolution {
                contract: contract.to_string(),
                source,
            })?;

        tracing::debug!(
            contract,
            bytecode_len = factory.bytecode.len(),
            "submitting deployment"
        );
        let pending = self.network.submit(&factory).await.map_err(|source| {
            DeploymentError::Submission {
                contract: contract.to_string(),
                source,
            }
        })?;

        tracing::debug!(contract, tx_hash = %pending.tx_hash, "waiting for confirmation");
        let deployment = self.network.confirm(pending).await.map_err(|source| {
            DeploymentError::Confirmation {
                contract: contract.to_string(),
                source,
            }
        })?;

        tracing::info!(
            contract,
            address = %deployment.address,
            tx_hash = %deployment.tx_hash,
            block = ?deployment.block_number,
            "deployment confirmed"
        );
        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            error::ErrorKind,
            traits::{
                ContractFactory,
                MockArtifactSource,
                MockNetwork,
                PendingDeployment,
            },
        },
        alloy::primitives::{Address, B256, Bytes, address},
        anyhow::anyhow,
    };

    const DEPLOYED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    fn factory() -> ContractFactory {
        ContractFactory {
            name: CONTRACT_NAME.to_string(),
            bytecode: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]),
        }
    }

    fn pending() -> PendingDeployment {
        PendingDeployment {
            contract: CONTRACT_NAME.to_string(),
            tx_hash: B256::repeat_byte(1),
        }
    }

    fn artifacts_ok() -> MockArtifactSource {
        let mut artifacts = MockArtifactSource::new();
        artifacts
            .expect_contract_factory()
            .withf(|name| name == CONTRACT_NAME)
            .times(1)
            .returning(|_| Ok(factory()));
        artifacts
    }

    #[tokio::test]
    async fn deploys_and_returns_confirmed_address() {
        let mut network = MockNetwork::new();
        network
            .expect_submit()
            .withf(|factory_| *factory_ == factory())
            .times(1)
            .returning(|_| Ok(pending()));
        network
            .expect_confirm()
            .withf(|pending_| *pending_ == pending())
            .times(1)
            .returning(|pending| {
                Ok(Deployment {
                    contract: pending.contract,
                    address: DEPLOYED,
                    tx_hash: pending.tx_hash,
                    block_number: Some(1),
                })
            });

        let deployer = Deployer::new(Arc::new(artifacts_ok()), Arc::new(network));
        let deployment = deployer.run().await.unwrap();

        assert_eq!(deployment.address, DEPLOYED);
        assert_eq!(deployment.contract, CONTRACT_NAME);
        assert_eq!(deployment.tx_hash, B256::repeat_byte(1));
    }

    #[tokio::test]
    async fn factory_failure_never_submits() {
        let mut artifacts = MockArtifactSource::new();
        artifacts
            .expect_contract_factory()
            .times(1)
            .returning(|_| Err(anyhow!("artifact not found")));
        let mut network = MockNetwork::new();
        network.expect_submit().never();
        network.expect_confirm().never();

        let deployer = Deployer::new(Arc::new(artifacts), Arc::new(network));
        let err = deployer.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FactoryResolution);
    }

    #[tokio::test]
    async fn submission_failure_never_waits_for_confirmation() {
        let mut network = MockNetwork::new();
        network
            .expect_submit()
            .times(1)
            .returning(|_| Err(anyhow!("insufficient funds for gas * price + value")));
        network.expect_confirm().never();

        let deployer = Deployer::new(Arc::new(artifacts_ok()), Arc::new(network));
        let err = deployer.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Submission);
    }

    #[tokio::test]
    async fn confirmation_failure_yields_no_deployment() {
        let mut network = MockNetwork::new();
        network
            .expect_submit()
            .times(1)
            .returning(|_| Ok(pending()));
        network
            .expect_confirm()
            .times(1)
            .returning(|_| Err(anyhow!("timed out waiting for receipt")));

        let deployer = Deployer::new(Arc::new(artifacts_ok()), Arc::new(network));
        let err = deployer.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Confirmation);
        assert_eq!(err.to_string(), "deployment of Provenance was not confirmed");
    }

    #[tokio::test]
    async fn deterministic_failure_is_reported_the_same_way() {
        let mut artifacts = MockArtifactSource::new();
        artifacts
            .expect_contract_factory()
            .times(3)
            .returning(|_| Ok(factory()));
        let mut network = MockNetwork::new();
        network
            .expect_submit()
            .times(3)
            .returning(|_| Err(anyhow!("connection refused")));
        network.expect_confirm().never();

        let deployer = Deployer::new(Arc::new(artifacts), Arc::new(network));
        for _ in 0..3 {
            let err = deployer.run().await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Submission);
            assert_eq!(err.to_string(), "failed to submit deployment of Provenance");
        }
    }
}
