use anyhow::Context;
use clap::Parser;
use watcher_api::auth::{generate_jwt, AccessLevel, Claims};
use watcher_api::config;

/// Mint a bearer token for calling the watcher API
#[derive(Parser)]
#[command(name = "watcher-token")]
#[command(version)]
struct Cli {
    #[arg(long, help = "User key the token identifies")]
    user: String,

    #[arg(long, default_value = "full", help = "Access level: deny, read, edit, full or root")]
    access: AccessLevel,

    #[arg(long, help = "Hours until expiry (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
    hours: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let security = &config::config().security;

    let hours = cli.hours.unwrap_or(security.jwt_expiry_hours);
    let claims = Claims::new(cli.user, cli.access, hours).context("invalid token expiry")?;
    let token = generate_jwt(&claims, &security.jwt_secret).context("failed to sign token")?;

    println!("{}", token);
    Ok(())
}
