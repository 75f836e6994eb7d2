use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the dashboard API deployments the CLI can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Public tunnel in front of the fund's reporting server.
    #[default]
    Production,
    /// Reporting server running on this machine.
    Local,
    /// Any other base URL, typically from the command line or the config file.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => "https://supercordial-cary-peerlessly.ngrok-free.dev".to_string(),
            Environment::Local => "http://127.0.0.1:5000".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" => Ok(Environment::Local),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: s.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
