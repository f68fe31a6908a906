//! Command-line argument definition and pre-validation.
//!
//! Invalid addresses and prefix lengths are rejected here with targeted
//! messages before the model is ever constructed; anything that slips
//! through is caught generically in `main`.

use clap::{App, Arg, ArgMatches};

use crate::models::IPV4_REGEX;

const ADDRESS_DESCRIPTION: &str = "An IPv4 address in dot-decimal notation, e.g. 192.168.1.100";
const CIDR_DESCRIPTION: &str = "A netmask in CIDR notation (only the digits), e.g. 24";
const BINARY_DESCRIPTION: &str = "Show binary representation";

/// Parsed and pre-validated command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub address: String,
    pub cidr: Option<u8>,
    pub binary: bool,
}

/// Parse `std::env::args`, exiting with usage on invalid input.
pub fn parse_args() -> CliArgs {
    from_matches(&app().get_matches())
}

fn app() -> App<'static, 'static> {
    App::new("ipcalc")
        .about("Gives various information related to an IPv4 address")
        .arg(
            Arg::with_name("address")
                .help(ADDRESS_DESCRIPTION)
                .required(true)
                .validator(validate_address),
        )
        .arg(
            Arg::with_name("cidr")
                .short("c")
                .long("cidr")
                .value_name("CIDR")
                .takes_value(true)
                .help(CIDR_DESCRIPTION)
                .validator(validate_cidr),
        )
        .arg(
            Arg::with_name("binary")
                .short("b")
                .long("binary")
                .visible_alias("verbose")
                .help(BINARY_DESCRIPTION),
        )
}

fn from_matches(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        address: matches.value_of("address").unwrap_or_default().to_string(),
        // validated above, so a parse failure just drops the option
        cidr: matches.value_of("cidr").and_then(|v| v.parse().ok()),
        binary: matches.is_present("binary"),
    }
}

fn validate_address(value: String) -> Result<(), String> {
    if IPV4_REGEX.is_match(&value) {
        Ok(())
    } else {
        Err(format!("Sorry. '{value}' is not a valid IPv4 address."))
    }
}

fn validate_cidr(value: String) -> Result<(), String> {
    match value.parse::<i64>() {
        Ok(n) if (0..=32).contains(&n) => Ok(()),
        _ => Err(format!(
            "Sorry. '{value}' is not a valid CIDR.\nA valid CIDR is a number between 0 and 32 included."
        )),
    }
}
