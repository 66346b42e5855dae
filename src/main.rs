// src/main.rs

use anyhow::Context;
use shellrunner::{ShellRunnerError, cli, logging, run_async};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("shellrunner error: {err:?}");
            std::process::exit(1);
        }
    }
}

/// Returns the exit code to leave with: the command's status.
async fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    let spec = args.command_spec();
    let options = args.run_options();

    let result = match run_async(spec, options).await {
        Ok(result) => result,
        Err(ShellRunnerError::Command(failure)) => {
            if args.json {
                print_json(failure.result())?;
            } else {
                eprintln!("shellrunner: {failure}");
            }
            return Ok(failure.status());
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        print_json(&result)?;
    }
    Ok(result.status())
}

fn print_json(result: &shellrunner::ExecutionResult) -> anyhow::Result<()> {
    let json = serde_json::to_string(result).context("serialising result")?;
    println!("{json}");
    Ok(())
}
