use tracing::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interface the HTTP server binds to
    pub host: String,
    /// Port for the application to run on. `0` asks the OS for a free port.
    pub port: u16,
}

impl Settings {
    /// Reads `SERVER_HOST` and `SERVER_PORT` from the process environment.
    /// Call `dotenv::dotenv()` first to pick up a `.env` file, and install the
    /// tracing subscriber first so an invalid port is reported.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("SERVER_PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given SERVER_PORT: {} is not valid, falling back to the default port: {}.",
                        raw, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
