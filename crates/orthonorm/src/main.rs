use std::{io, process};

use orthonorm::{
    config::Config,
    shell::{self, Outcome},
};

fn main() -> anyhow::Result<()> {
    orthonorm::init_logger!();

    let config = Config::from_env()?;
    log::debug!("tolerance: {}", config.tolerance());

    let outcome = shell::run(io::stdin().lock(), io::stdout().lock(), &config)?;
    if outcome != Outcome::Completed {
        process::exit(1);
    }
    Ok(())
}
