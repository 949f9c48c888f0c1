//! Sequence and duration fields

use std::time::Duration;

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Comma-separated by default
    #[env("REPLICAS")]
    pub replicas: Vec<String>,

    // Custom separator for PATH-style values
    #[env("SEARCH_PATH", separator = ":")]
    pub search_path: Vec<String>,

    #[env("RETRY_DELAYS")]
    pub retry_delays: Vec<Duration>,

    #[env("REQUEST_TIMEOUT", default = "2h45m")]
    pub request_timeout: Duration,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REPLICAS", "replica1,replica2,replica3");
    std::env::set_var("SEARCH_PATH", "/usr/local/bin:/usr/bin:/bin");
    std::env::set_var("RETRY_DELAYS", "250ms,1s,5s");

    let mut config = Config::default();
    envbind::bind(&mut config)?;

    println!("Replicas: {:?}", config.replicas);
    println!("Search path: {:?}", config.search_path);
    println!("Retry delays: {:?}", config.retry_delays);
    println!("Request timeout: {:?}", config.request_timeout);

    Ok(())
}
