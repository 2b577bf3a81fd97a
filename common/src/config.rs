use clap::Parser;

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    #[arg(id = "db-user", long, env = "DB_USER", default_value = "cpedict")]
    pub username: String,
    #[arg(
        id = "db-password",
        long,
        env = "DB_PASSWORD",
        default_value = "cpedict"
    )]
    pub password: String,
    #[arg(id = "db-host", long, env = "DB_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "db-port", long, env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(id = "db-name", long, env = "DB_NAME", default_value = "cpedict")]
    pub name: String,
    /// A full connection URL, overriding the individual settings.
    ///
    /// This is the way to select a SQLite store, e.g. `sqlite://cpe.db?mode=rwc`.
    #[arg(id = "db-url", long, env = "DB_URL")]
    pub url: Option<String>,
    #[arg(id = "db-max-conn", long, env = "DB_MAX_CONN", default_value_t = 16)]
    pub max_conn: u32,
    #[arg(id = "db-min-conn", long, env = "DB_MIN_CONN", default_value_t = 1)]
    pub min_conn: u32,
}

impl Database {
    /// Build a configuration from the `DB_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, clap::Error> {
        #[derive(clap::Parser)]
        struct Config {
            #[command(flatten)]
            database: Database,
        }

        Ok(Config::try_parse_from(["cpedict"])?.database)
    }

    /// A configuration connecting to an explicit URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self, clap::Error> {
        Ok(Self {
            url: Some(url.into()),
            ..Self::from_env()?
        })
    }

    pub fn to_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn url_overrides_fields() {
        let config = Database {
            username: "user".into(),
            password: "secret".into(),
            host: "db".into(),
            port: 5433,
            name: "dictionary".into(),
            url: None,
            max_conn: 1,
            min_conn: 1,
        };

        assert_eq!(config.to_url(), "postgres://user:secret@db:5433/dictionary");

        let config = Database {
            url: Some("sqlite::memory:".into()),
            ..config
        };

        assert_eq!(config.to_url(), "sqlite::memory:");
    }
}
