use azure_rg_provision::cli::Args;
use azure_rg_provision::config::LOG_CONFIG_FILE;
use azure_rg_provision::logging::init_logging;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    let logging = match init_logging(LOG_CONFIG_FILE) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Error initializing log4rs: {e}");
            false
        }
    };
    if args.no_color {
        colored::control::set_override(false);
    }
    log::info!("#Start main() {:?}", args);

    match azure_rg_provision::run(&args).await {
        Ok(reports) => {
            for report in &reports {
                log::info!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            // both log4rs setups send errors to stderr
            if logging {
                log::error!("{e}");
            } else {
                eprintln!("{} {e}", "ERROR:".red());
            }
            ExitCode::from(azure_rg_provision::exit_code(e.as_ref()))
        }
    }
}
