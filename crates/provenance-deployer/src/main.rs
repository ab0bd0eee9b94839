use {
    clap::Parser,
    provenance_deployer::arguments::{self, Arguments},
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine, everything can also come from flags or the
    // process environment.
    let dotenv = dotenvy::dotenv();
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let status = arguments::exit_status(&err);
            if status == provenance_deployer::EXIT_SUCCESS {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::from(status);
        }
    };
    observe::tracing::initialize(&observe::config::Config::new(
        &args.log_filter,
        args.use_json_logs,
    ));
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }
    tracing::info!("running provenance deployer with validated arguments:\n{}", args);
    ExitCode::from(provenance_deployer::main(args).await)
}
