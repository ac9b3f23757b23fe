//! Oneshot parameter reader.
//!
//! Reads one parameter from SSM, based on arguments given on the command
//! line, and prints its value. Useful for checking names and permissions
//! locally without deploying anything.

use anyhow::{Context, Result};
use std::env;

use lambda_helpers::SsmParameterClient;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args();
    args.next(); // skip argv[0]

    let mut name = None;
    let mut encrypted = true;

    for arg in args {
        if arg == "--plain" {
            encrypted = false;
        } else {
            name = Some(arg);
        }
    }

    let name = name.context("usage: lambda-helpers-oneshot [--plain] <parameter-name>")?;

    let client = SsmParameterClient::from_env(encrypted).await;
    let value = client
        .read_string(&name)
        .await
        .with_context(|| format!("reading parameter {name}"))?;

    println!("{value}");
    Ok(())
}
