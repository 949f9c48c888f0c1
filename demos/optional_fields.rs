//! Optional fields

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("APP_NAME,required")]
    pub name: String,

    // None when unset, Some when set
    #[env("SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    #[env("WORKER_COUNT")]
    pub worker_count: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_NAME", "demo");
    std::env::set_var("WORKER_COUNT", "8");

    let mut config = Config::default();
    envbind::bind(&mut config)?;

    println!("Name: {}", config.name);
    println!("Sentry DSN: {:?}", config.sentry_dsn);
    println!("Worker count: {:?}", config.worker_count);

    Ok(())
}
