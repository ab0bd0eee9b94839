pub mod arguments;
pub mod artifact;
pub mod deployer;
pub mod env_file;
pub mod error;
pub mod network;
pub mod traits;

use {
    crate::{
        artifact::ArtifactFile,
        deployer::Deployer,
        error::DeploymentError,
        network::AlloyNetwork,
        traits::Deployment,
    },
    std::{io::Write, path::Path, sync::Arc},
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Deploys the contract described by `args` and returns the process exit
/// status.
pub async fn main(args: arguments::Arguments) -> u8 {
    let artifacts = ArtifactFile::new(args.contract_artifact_path.clone());
    let network = AlloyNetwork::new(
        args.node_url(),
        args.private_key.clone(),
        args.confirmations,
        args.confirmation_timeout,
    );
    let deployer = Deployer::new(Arc::new(artifacts), Arc::new(network));

    run(
        &deployer,
        args.deployment_env_file.as_deref(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .await
}

/// Runs the deployment, records the address in `env_path` if given and
/// reports the outcome.
pub async fn run(
    deployer: &Deployer,
    env_path: Option<&Path>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8 {
    let result = deployer.run().await;
    if let (Ok(deployment), Some(path)) = (&result, env_path) {
        match env_file::record_address(path, deployment.address).await {
            Ok(()) => tracing::info!(path = %path.display(), "recorded deployed address"),
            // The contract is deployed at this point so the run still counts
            // as successful.
            Err(err) => tracing::warn!(?err, "failed to record deployed address"),
        }
    }
    report(result, stdout, stderr)
}

/// Writes the outcome of a deployment for the calling process and returns
/// the matching exit status.
///
/// Success prints exactly one line to `stdout`. Failures print the full error
/// chain to `stderr`.
pub fn report(
    result: Result<Deployment, DeploymentError>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8 {
    match result {
        Ok(deployment) => {
            match writeln!(
                stdout,
                "{} deployed to: {}",
                deployment.contract, deployment.address
            ) {
                Ok(()) => EXIT_SUCCESS,
                Err(err) => {
                    tracing::error!(?err, "failed to report deployed address");
                    EXIT_FAILURE
                }
            }
        }
        Err(err) => {
            let kind = err.kind();
            let err = anyhow::Error::from(err);
            tracing::error!(?kind, %err, "deployment failed");
            if let Err(write_err) = writeln!(stderr, "Error: {err:?}") {
                tracing::error!(?write_err, "failed to report deployment error");
            }
            EXIT_FAILURE
        }
    }
}
