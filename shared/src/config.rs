use tracing::warn;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub seed_demo: bool,
}

impl Config {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 7070;

    pub fn from_env() -> Self {
        let port = std::env::var("TICKETD_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(Self::DEFAULT_PORT);
        Self {
            host: std::env::var("TICKETD_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string()),
            port,
            allowed_origins: std::env::var("TICKETD_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            seed_demo: match std::env::var("TICKETD_SEED_DEMO") {
                Ok(value) => match value.to_lowercase().as_str() {
                    "1" | "true" | "yes" => true,
                    "0" | "false" | "no" => false,
                    other => {
                        warn!(
                            "Unrecognized TICKETD_SEED_DEMO value '{}', seeding demo tickets",
                            other
                        );
                        true
                    }
                },
                Err(_) => true,
            },
        }
    }
}
