use lib::portal::models::{Args, Config};
use lib::portal::notifier::ConsoleNotifier;
use lib::portal::portal_api::PortalClient;
use lib::portal::run_tool::run;
use lib::portal::session::Session;

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = match Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("PORTAL_"))
        .extract()
    {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("Using portal API at {}", config.api_url);

    let session = match Session::load(&config.session_json_path) {
        Ok(session) => session,
        Err(err) => {
            error!("Could not read the session: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let notifier = ConsoleNotifier {
        assume_yes: args.yes,
    };
    let api = PortalClient::new(reqwest::Client::new(), &config.api_url, &session, &notifier);
    let today = Local::now().date_naive();

    /* Open the requested screen */
    match run(&api, &notifier, &session, &config, args.command, today).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
