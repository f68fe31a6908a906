pub mod cli;
pub mod models;
pub mod output;

pub use models::{Ipv4Address, Ipv4Error, NetworkClass, PrefixSpec};

/// Build the address model from pre-validated CLI options and render
/// the report.
pub fn run(args: &cli::CliArgs) -> Result<(), Ipv4Error> {
    log::info!("#Start run() address={}", args.address);

    let mut ip: Ipv4Address = args.address.parse()?;
    if let Some(cidr) = args.cidr {
        ip.set_cidr(cidr)?;
    }

    output::render(&ip, args.binary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ok() {
        let args = cli::CliArgs {
            address: "192.168.1.100".to_string(),
            cidr: Some(24),
            binary: true,
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_run_invalid_address() {
        let args = cli::CliArgs {
            address: "999.1.1.1".to_string(),
            cidr: None,
            binary: false,
        };
        assert_eq!(
            run(&args),
            Err(Ipv4Error::InvalidAddress("999.1.1.1".to_string()))
        );
    }

    #[test]
    fn test_run_invalid_prefix() {
        let args = cli::CliArgs {
            address: "10.0.0.1".to_string(),
            cidr: Some(33),
            binary: false,
        };
        assert_eq!(run(&args), Err(Ipv4Error::InvalidPrefix(33)));
    }
}
