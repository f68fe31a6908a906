use ipcalc::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).ok();
    log::info!("#Start main()");

    let args = cli::parse_args();
    match ipcalc::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Something bad happened.");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
