//! Example demonstrating prefixed binding

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("DATABASE_URL")]
    pub database_url: String,

    #[env("API_KEY")]
    pub api_key: String,

    #[env("PORT", default = "8080")]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables with prefix
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    // Every lookup reads MYAPP_<name>; the bare names are never consulted
    let mut config = Config::default();
    envbind::bind_with_prefix(&mut config, "MYAPP_")?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);

    Ok(())
}
