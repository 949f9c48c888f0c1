//! Nested configuration blocks

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct DatabaseConfig {
    #[env("DB_HOST", default = "localhost")]
    pub host: String,

    #[env("DB_PORT", default = "5432")]
    pub port: u16,
}

#[derive(Debug, Default, EnvBind)]
struct TlsConfig {
    #[env("TLS_CERT,required")]
    pub cert_path: String,
}

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("APP_NAME", default = "demo")]
    pub name: String,

    // Always walked; the prefix applies uniformly
    #[env(nested)]
    pub database: DatabaseConfig,

    // Walked only when present: a None block is skipped silently
    #[env(nested)]
    pub tls: Option<TlsConfig>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("SVC_DB_HOST", "db.internal");
    std::env::set_var("SVC_DB_PORT", "6432");

    // tls stays None, so TLS_CERT is never required
    let mut config = Config::default();
    envbind::bind_with_prefix(&mut config, "SVC_")?;
    println!("Without TLS block: {config:?}");

    // Opting into the block makes its required variables matter
    std::env::set_var("SVC_TLS_CERT", "/etc/ssl/svc.pem");
    let mut config = Config {
        tls: Some(TlsConfig::default()),
        ..Default::default()
    };
    envbind::bind_with_prefix(&mut config, "SVC_")?;
    println!("With TLS block: {config:?}");

    Ok(())
}
