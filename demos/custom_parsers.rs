//! Custom parser registry

use envbind::{EnvBind, Parsers};

#[derive(Debug, Default)]
struct Endpoint {
    host: String,
    port: u16,
}

fn parse_endpoint(raw: &str) -> Result<Endpoint, String> {
    let (host, port) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected host:port, got '{raw}'"))?;
    Ok(Endpoint {
        host: host.to_owned(),
        port: port.parse().map_err(|e| format!("bad port: {e}"))?,
    })
}

#[derive(Debug, Default, EnvBind)]
struct Config {
    // No built-in rule for Endpoint: binds only through the registry
    #[env("UPSTREAM")]
    pub upstream: Endpoint,

    // The registry also overrides built-in rules for its exact type:
    // this one parses a JSON array instead of splitting on commas
    #[env("TAGS")]
    pub tags: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("UPSTREAM", "api.internal:8443");
    std::env::set_var("TAGS", r#"["blue","canary"]"#);

    let parsers = Parsers::new()
        .with(parse_endpoint)
        .with(|raw: &str| serde_json::from_str::<Vec<String>>(raw));

    let mut config = Config::default();
    envbind::bind_with_parsers(&mut config, parsers)?;

    println!("Upstream: {}:{}", config.upstream.host, config.upstream.port);
    println!("Tags: {:?}", config.tags);

    Ok(())
}
