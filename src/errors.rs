use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("config error: {0}")] Config(String),
    #[error("{0} provider needs an API key")] MissingApiKey(&'static str),
    #[error("provider error: {0}")] Provider(String),
    #[error("io error: {0}")] Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")] Toml(#[from] toml::de::Error),
}
