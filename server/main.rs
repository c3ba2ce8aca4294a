use actix_files::Files;
use actix_web::{App, HttpServer, middleware};
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "./dist";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServerConfig {
    port: u16,
    dist_dir: String,
}

impl ServerConfig {
    /// Reads `PORT` and `DIST_DIR`, falling back to defaults when unset or invalid
    fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("DIST_DIR").ok())
    }

    fn from_vars(port: Option<String>, dist_dir: Option<String>) -> Self {
        let port = match port {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let dist_dir = dist_dir
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());

        Self { port, dist_dir }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    log::info!("Serving {} on 0.0.0.0:{}", config.dist_dir, config.port);

    let dist_dir = config.dist_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/", dist_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_vars(None, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, DEFAULT_DIST_DIR);
    }

    #[test]
    fn test_reads_port_and_dist_dir() {
        let config = ServerConfig::from_vars(Some("3000".to_string()), Some("/srv/app".to_string()));
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, "/srv/app");
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_vars(Some("eighty".to_string()), Some(String::new()));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, DEFAULT_DIST_DIR);
    }
}
