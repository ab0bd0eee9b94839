/// Reasons a deployment can fail. Each variant corresponds to the step of
/// the workflow that failed.
#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("failed to resolve contract factory for {contract}")]
    FactoryResolution {
        contract: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to submit deployment of {contract}")]
    Submission {
        contract: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("deployment of {contract} was not confirmed")]
    Confirmation {
        contract: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FactoryResolution,
    Submission,
    Confirmation,
}

impl DeploymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FactoryResolution { .. } => ErrorKind::FactoryResolution,
            Self::Submission { .. } => ErrorKind::Submission,
            Self::Confirmation { .. } => ErrorKind::Confirmation,
        }
    }
}
