use std::process;
use clap::{error::ErrorKind, Parser};
use dotenv::dotenv;
use log::*;

use check_mesos::{check::Check, utility, Opts, CHECK_NAME};

fn main()
{
    dotenv().ok();

    let options = match Opts::try_parse() {
        Ok(options) => options,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => error.exit(),
        Err(error) => {
            // usage errors are reported as UNKNOWN, like every other failure of the check
            let message = error.to_string().lines().next().unwrap_or_default().to_string();
            let outcome = Check::new(CHECK_NAME).unknown(&anyhow::anyhow!(message));
            println!("{}", outcome);
            process::exit(outcome.exit_code());
        }
    };

    utility::init_logging(options.verbose);
    info!("checking master {:?} port {:?}", options.host, options.port);

    let outcome = check_mesos::run(&options);
    println!("{}", outcome);
    process::exit(outcome.exit_code());
}
