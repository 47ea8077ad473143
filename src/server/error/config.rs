use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configuration value is present but cannot be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    /// The gateway route file could not be read.
    #[error("Failed to read route file {path}: {source}")]
    RouteFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The gateway route file is not valid TOML for the route table schema.
    #[error("Failed to parse route file {path}: {source}")]
    RouteFileParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
