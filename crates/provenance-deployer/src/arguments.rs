use {
    crate::{EXIT_FAILURE, EXIT_SUCCESS},
    alloy::signers::local::PrivateKeySigner,
    anyhow::{Context, Result},
    clap::error::ErrorKind,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
        time::Duration,
    },
    url::Url,
};

#[derive(clap::Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to. Takes precedence over
    /// `--blockchain-rpc`.
    #[clap(long, env)]
    pub node_url: Option<Url>,

    /// Node URL under the name existing ProvenanceGuard `.env` files use.
    /// Only consulted if `--node-url` is not set.
    #[clap(long, env = "BLOCKCHAIN_RPC", default_value = "http://127.0.0.1:7545")]
    pub blockchain_rpc: Url,

    /// Hex encoded private key of the account paying for the deployment.
    #[clap(long, env)]
    pub private_key: PrivateKeySigner,

    /// Compiled artifact of the contract to deploy.
    #[clap(
        long,
        env,
        default_value = "blockchain/artifacts/contracts/Provenance.sol/Provenance.json"
    )]
    pub contract_artifact_path: PathBuf,

    /// Number of blocks the deployment needs to be buried under before it is
    /// considered final.
    #[clap(
        long,
        env,
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub confirmations: u64,

    /// How long to wait for the confirmation in seconds. Waits indefinitely
    /// if not set.
    #[clap(long, env, value_parser = duration_from_seconds)]
    pub confirmation_timeout: Option<Duration>,

    /// Env file in which `DEPLOYED_CONTRACT_ADDRESS` gets recorded after a
    /// successful deployment.
    #[clap(long, env)]
    pub deployment_env_file: Option<PathBuf>,

    #[clap(long, env, default_value = "warn,provenance_deployer=debug")]
    pub log_filter: String,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub use_json_logs: bool,
}

impl Arguments {
    /// The node to deploy through.
    pub fn node_url(&self) -> Url {
        self.node_url
            .clone()
            .unwrap_or_else(|| self.blockchain_rpc.clone())
    }
}

/// Exit status for a failure to parse the arguments. Requests for help or
/// the version are not failures.
pub fn exit_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

pub fn duration_from_seconds(s: &str) -> Result<Duration> {
    let seconds: f64 = s.parse().context("not a number")?;
    Duration::try_from_secs_f64(seconds).context("not a valid duration")
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            node_url: _,
            blockchain_rpc: _,
            private_key,
            contract_artifact_path,
            confirmations,
            confirmation_timeout,
            deployment_env_file,
            log_filter,
            use_json_logs,
        } = self;

        writeln!(f, "node_url: {}", self.node_url())?;
        writeln!(f, "private_key: SECRET")?;
        writeln!(f, "deployer_address: {}", private_key.address())?;
        writeln!(
            f,
            "contract_artifact_path: {}",
            contract_artifact_path.display()
        )?;
        writeln!(f, "confirmations: {confirmations}")?;
        display_option(
            f,
            "confirmation_timeout",
            &confirmation_timeout.map(|d| format!("{d:?}")),
        )?;
        display_option(
            f,
            "deployment_env_file",
            &deployment_env_file.as_ref().map(|p| p.display()),
        )?;
        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}

fn display_option(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<impl Display>,
) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}
