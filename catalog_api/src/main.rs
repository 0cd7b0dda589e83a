use std::net::{IpAddr, SocketAddr};

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Context, Result};
use catalog_client::{CatalogClient, DEFAULT_BASE_URL};
use cors::{AllowedOrigin, CorsPolicy};
use dotenv::dotenv;
use log::info;

mod cors;
mod endpoints;
mod requests;
mod response;
mod source;

#[actix_web::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(|key: &str| std::env::var(key).ok())?;
    let address = SocketAddr::new(config.address, config.port);
    let client = web::Data::new(CatalogClient::new(config.api_base_url.clone()));
    let policy = web::Data::new(CorsPolicy::new(config.allowed_origin.clone()));

    info!(
        "Starting catalog api on {} (upstream {})",
        address, config.api_base_url
    );
    HttpServer::new(move || {
        App::new()
            .wrap(policy.middleware())
            .wrap(Logger::default())
            .app_data(client.clone())
            .app_data(policy.clone())
            .configure(endpoints::configure::<CatalogClient>)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
struct Config {
    address: IpAddr,
    port: u16,
    api_base_url: String,
    allowed_origin: AllowedOrigin,
}

fn load_config(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
    Ok(Config {
        address: var("API_ADDRESS")
            .unwrap_or_else(|| "0.0.0.0".into())
            .parse::<IpAddr>()
            .context("API_ADDRESS is not an IP address")?,
        port: var("API_PORT")
            .map(|port| port.parse::<u16>())
            .transpose()
            .context("API_PORT is not a port number")?
            .unwrap_or(8081),
        api_base_url: var("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        allowed_origin: AllowedOrigin::parse(&var("CORS_ALLOWED_ORIGIN").unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load_config(env(&[])).unwrap();

        assert_eq!(config.address, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.port, 8081);
        assert_eq!(config.api_base_url, "https://api.batmanapi.com/v1");
        assert_eq!(config.allowed_origin, AllowedOrigin::Any);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = load_config(env(&[
            ("API_ADDRESS", "127.0.0.1"),
            ("API_PORT", "9000"),
            ("API_BASE_URL", "http://localhost:1337/v1"),
            ("CORS_ALLOWED_ORIGIN", "https://gotham.example"),
        ]))
        .unwrap();

        assert_eq!(config.address, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_base_url, "http://localhost:1337/v1");
        assert_eq!(
            config.allowed_origin,
            AllowedOrigin::Exact("https://gotham.example".to_string())
        );
    }

    #[test]
    fn invalid_values_are_startup_errors() {
        assert!(load_config(env(&[("API_PORT", "eighty")])).is_err());
        assert!(load_config(env(&[("API_ADDRESS", "gotham")])).is_err());
    }
}
