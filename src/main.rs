//! Interactive password checker.
//!
//! Reads one password from stdin and prints a single classification line.
//! Diagnostics (denylist load problems, entropy estimates) go to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use pwd_checker::{CrackSpeed, Denylist, entropy_bits, evaluate, format_duration};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let path = Denylist::default_path();
    let denylist = match Denylist::from_file(&path) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("Warning: couldn't load the denylist ({err}); every password will be scored");
            Denylist::default()
        }
    };

    print!("Enter password: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let input = line.trim_end_matches(['\r', '\n']);

    let bits = entropy_bits(input);
    tracing::info!("estimated entropy: {bits:.1} bits");
    for speed in CrackSpeed::SCENARIOS {
        tracing::debug!(
            "{}: {}",
            speed.label,
            format_duration(speed.mean_crack_seconds(bits))
        );
    }

    let password = SecretString::new(input.to_string().into());
    let evaluation = evaluate(&password, &denylist);
    println!("{evaluation}");

    Ok(())
}

/// Stderr logging with `RUST_LOG` override, defaulting to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
