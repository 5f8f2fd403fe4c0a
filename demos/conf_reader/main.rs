use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use inireader::IniReader;

/// Print the server settings found in an INI configuration file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "./conf.ini")]
    config: String,
}

fn run(args: &Args) -> inireader::Result<()> {
    let reader = IniReader::from_file(&args.config)?;
    let server = reader.get("server")?;

    let ip = server.get("ip").to_string()?;
    let port = server.get("port").to_int()?;
    let timeout = server.get("timeout").to_float_or(50.0)?;

    println!("ip:{}", ip);
    println!("port:{}", port);
    println!("timeout:{}", timeout);

    Ok(())
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to read {}: {}", args.config, e);
            ExitCode::FAILURE
        }
    }
}
