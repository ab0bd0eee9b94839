use {
    crate::traits::{ContractFactory, Deployment, Network, PendingDeployment},
    alloy::{
        network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
        providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
        rpc::types::{TransactionReceipt, TransactionRequest},
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result, ensure},
    std::time::Duration,
    url::Url,
};

/// Deploys contracts through an Ethereum JSON-RPC node. Transactions are
/// signed locally with the configured key; nonce, gas and chain id are
/// filled in by the provider.
pub struct AlloyNetwork {
    provider: DynProvider,
    confirmations: u64,
    confirmation_timeout: Option<Duration>,
}

impl AlloyNetwork {
    pub fn new(
        node_url: Url,
        signer: PrivateKeySigner,
        confirmations: u64,
        confirmation_timeout: Option<Duration>,
    ) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect_http(node_url)
            .erased();
        Self {
            provider,
            confirmations,
            confirmation_timeout,
        }
    }
}

#[async_trait::async_trait]
impl Network for AlloyNetwork {
    async fn submit(&self, factory: &ContractFactory) -> Result<PendingDeployment> {
        let tx = TransactionRequest::default().with_deploy_code(factory.bytecode.clone());
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("node rejected deployment transaction")?;
        Ok(PendingDeployment {
            contract: factory.name.clone(),
            tx_hash: *pending.tx_hash(),
        })
    }

    async fn confirm(&self, pending: PendingDeployment) -> Result<Deployment> {
        let root = self.provider.root().clone();
        let receipt = PendingTransactionBuilder::new(root, pending.tx_hash)
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.confirmation_timeout)
            .get_receipt()
            .await
            .with_context(|| format!("no receipt for transaction {}", pending.tx_hash))?;
        into_deployment(pending, &receipt)
    }
}

fn into_deployment(
    pending: PendingDeployment,
    receipt: &TransactionReceipt,
) -> Result<Deployment> {
    ensure!(
        ReceiptResponse::status(receipt),
        "transaction {} reverted",
        pending.tx_hash,
    );
    let address = receipt
        .contract_address
        .with_context(|| format!("transaction {} did not create a contract", pending.tx_hash))?;
    Ok(Deployment {
        contract: pending.contract,
        address,
        tx_hash: pending.tx_hash,
        block_number: receipt.block_number,
    })
}
