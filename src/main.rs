//! Interactive election record-keeper.

use std::io;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info, warn};

use polling_station::{
    config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX},
    console::Console,
    error::Result,
};

const PROGRAM_NAME: &str = "polling-station";

const ABOUT_TEXT: &str = "Register candidates and voters, cast one vote per voter, view tallies.";

const LOG_CONFIG: &str = "log4rs.yaml";

const CONFIG_PATH: &str = "CONFIG_PATH";
const DATA_FILE: &str = "DATA_FILE";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .arg(
            Arg::new(CONFIG_PATH)
                .long("config")
                .short('c')
                .value_name("PATH")
                .help(format!(
                    "Config file to read [default: {DEFAULT_CONFIG_FILE}]. \
                    Settings can also be given as {ENV_PREFIX}* environment variables."
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(DATA_FILE)
                .long("data-file")
                .value_name("PATH")
                .help("Election data file, overriding the configured one")
                .action(ArgAction::Set),
        )
}

/// Load the config and run the menus until the user exits.
fn run(args: &ArgMatches) -> Result<()> {
    let config_path = args
        .get_one::<String>(CONFIG_PATH)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_FILE);
    let mut config = Config::load(Path::new(config_path))?;
    if let Some(data_file) = args.get_one::<String>(DATA_FILE) {
        config = config.with_data_file(data_file);
    }
    if config.uses_placeholder_password() {
        warn!("The admin password is still the built-in placeholder; set ADMIN_PASSWORD");
    }

    let mut console = Console::open(io::stdin().lock(), io::stdout().lock(), config)?;
    console.run()
}

fn main() {
    // Set up logging. Log lines go to a file so they never mix with the prompts.
    match log4rs::init_file(LOG_CONFIG, Default::default()) {
        Ok(()) => info!("Initialised logging"),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let args = cli().get_matches();
    if let Err(err) = run(&args) {
        error!("{err}");
        error!("Critical failure, shutting down");
        eprintln!("{err}");
        std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_cli_usage() {
        let args = cli().try_get_matches_from([PROGRAM_NAME]).unwrap();
        assert_eq!(args.get_one::<String>(CONFIG_PATH), None);
        assert_eq!(args.get_one::<String>(DATA_FILE), None);

        let command_line = [
            PROGRAM_NAME,
            "--config",
            "other.toml",
            "--data-file",
            "election.json",
        ];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(
            args.get_one::<String>(CONFIG_PATH).map(String::as_str),
            Some("other.toml")
        );
        assert_eq!(
            args.get_one::<String>(DATA_FILE).map(String::as_str),
            Some("election.json")
        );

        let args = cli().try_get_matches_from([PROGRAM_NAME, "-c", "x.toml"]).unwrap();
        assert_eq!(
            args.get_one::<String>(CONFIG_PATH).map(String::as_str),
            Some("x.toml")
        );
    }

    #[test]
    fn bad_cli_usage() {
        // Positional arguments are not accepted.
        let command_line = [PROGRAM_NAME, "this", "invocation", "is", "incorrect"];
        cli().try_get_matches_from(command_line).unwrap_err();

        // Options need values.
        let command_line = [PROGRAM_NAME, "--data-file"];
        cli().try_get_matches_from(command_line).unwrap_err();
    }
}
