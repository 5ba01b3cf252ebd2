use anyhow::Result;
use saltline::generate_hash;
use tracing_subscriber::EnvFilter;

const SAMPLE_PASSWORDS: [&str; 3] = ["0000", "1111", "2222"];

fn main() -> Result<()> {
    // stdout carries only the hashes; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    for password in SAMPLE_PASSWORDS {
        println!("{password}: {}", generate_hash(password, None)?);
    }

    Ok(())
}
