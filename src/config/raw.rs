use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("waterfrontdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Config {
    /// The configuration that is bundled with the executable.
    pub fn bundled() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fills all missing sections from the other configuration.
    pub fn or(self, other: Self) -> Self {
        Self {
            db: self.db.or(other.db),
            webserver: self.webserver.or(other.webserver),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub default_proximity: u32,
    pub media_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bundled_config() {
        let cfg = Config::bundled().unwrap();
        let db = cfg.db.unwrap();
        assert_eq!("waterfront.db", db.connection_sqlite);
        assert_eq!(10, db.connection_pool_size);
        let webserver = cfg.webserver.unwrap();
        assert!(!webserver.cors);
        assert_eq!(20, webserver.default_proximity);
        assert_eq!("/media/", webserver.media_url);
    }

    #[test]
    fn fill_missing_sections() {
        let partial: Config = toml::from_str(
            r#"
            [webserver]
            cors = true
            default-proximity = 5
            media-url = "https://cdn.example.com/"
            "#,
        )
        .unwrap();
        let cfg = partial.or(Config::bundled().unwrap());
        assert_eq!("waterfront.db", cfg.db.unwrap().connection_sqlite);
        assert_eq!(5, cfg.webserver.unwrap().default_proximity);
    }

    #[test]
    fn reject_unknown_value_types() {
        let res = toml::from_str::<Config>(
            r#"
            [db]
            connection-sqlite = "x.db"
            connection-pool-size = "many"
            "#,
        );
        assert!(res.is_err());
    }
}
