//! Server configuration for the Storefront search API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STOREFRONT_SERVER_PORT` | 8080 | Server port |
//! | `STOREFRONT_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `STOREFRONT_LOG_LEVEL` | info | Log level |
//! | `STOREFRONT_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `STOREFRONT_ENABLE_CORS` | true | Enable CORS |
//! | `STOREFRONT_CORS_ORIGINS` | * | Allowed origins |
//! | `STOREFRONT_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `STOREFRONT_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `STOREFRONT_STORAGE_BACKEND` | elasticsearch | `elasticsearch` or `memory` |
//! | `STOREFRONT_ELASTICSEARCH_NODES` | http://localhost:9200 | Comma-separated node URLs |
//! | `STOREFRONT_ELASTICSEARCH_USERNAME` | | Basic auth user |
//! | `STOREFRONT_ELASTICSEARCH_PASSWORD` | | Basic auth password |
//! | `STOREFRONT_ELASTICSEARCH_TOKEN` | | Bearer token |
//! | `STOREFRONT_ECOMMERCE_INDEX` | kibana_sample_data_ecommerce | Order index |
//! | `STOREFRONT_PRODUCTS_INDEX` | products | Product index |
//!
//! Window sizes per search are set with `STOREFRONT_<SEARCH>_WINDOW_SIZE`.
//!
//! # Example
//!
//! ```rust
//! use storefront_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     storage_backend: "memory".to_string(),
//!     ..Default::default()
//! };
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;
use storefront_persistence::repository::{
    DEFAULT_ECOMMERCE_INDEX, DEFAULT_PRODUCTS_INDEX, ECommerceFields, RepositoryConfig,
    WindowConfig,
};

#[cfg(feature = "elasticsearch")]
use storefront_persistence::backends::elasticsearch::{ElasticsearchAuth, ElasticsearchConfig};

/// Which search engine the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// A remote Elasticsearch cluster.
    Elasticsearch,
    /// The process-local in-memory engine.
    Memory,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Elasticsearch => write!(f, "elasticsearch"),
            StorageBackendMode::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elasticsearch" | "es" => Ok(StorageBackendMode::Elasticsearch),
            "memory" | "in-memory" => Ok(StorageBackendMode::Memory),
            other => Err(format!(
                "unknown storage backend '{}', expected 'elasticsearch' or 'memory'",
                other
            )),
        }
    }
}

/// Server configuration for the Storefront search API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "E-commerce search API over Elasticsearch")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "STOREFRONT_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "STOREFRONT_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "STOREFRONT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "STOREFRONT_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "STOREFRONT_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "STOREFRONT_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "STOREFRONT_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "STOREFRONT_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Search engine backend (elasticsearch, memory).
    #[arg(long, env = "STOREFRONT_STORAGE_BACKEND", default_value = "elasticsearch")]
    pub storage_backend: String,

    /// Elasticsearch node URLs (comma-separated).
    #[arg(
        long,
        env = "STOREFRONT_ELASTICSEARCH_NODES",
        default_value = "http://localhost:9200"
    )]
    pub elasticsearch_nodes: String,

    /// Elasticsearch username for basic auth.
    #[arg(long, env = "STOREFRONT_ELASTICSEARCH_USERNAME")]
    pub elasticsearch_username: Option<String>,

    /// Elasticsearch password for basic auth.
    #[arg(long, env = "STOREFRONT_ELASTICSEARCH_PASSWORD")]
    pub elasticsearch_password: Option<String>,

    /// Elasticsearch bearer token (alternative to basic auth).
    #[arg(long, env = "STOREFRONT_ELASTICSEARCH_TOKEN")]
    pub elasticsearch_token: Option<String>,

    /// Skip TLS certificate validation. Development only.
    #[arg(long, env = "STOREFRONT_ELASTICSEARCH_INSECURE", default_value = "false")]
    pub elasticsearch_insecure: bool,

    /// Index holding e-commerce orders.
    #[arg(
        long,
        env = "STOREFRONT_ECOMMERCE_INDEX",
        default_value = DEFAULT_ECOMMERCE_INDEX
    )]
    pub ecommerce_index: String,

    /// Index holding catalog products.
    #[arg(long, env = "STOREFRONT_PRODUCTS_INDEX", default_value = DEFAULT_PRODUCTS_INDEX)]
    pub products_index: String,

    /// Maximum hits for exact-term searches (engine default when unset).
    #[arg(long, env = "STOREFRONT_TERM_WINDOW_SIZE")]
    pub term_window_size: Option<u32>,

    /// Maximum hits for multi-value searches.
    #[arg(long, env = "STOREFRONT_TERMS_WINDOW_SIZE", default_value = "100")]
    pub terms_window_size: Option<u32>,

    /// Maximum hits for prefix searches.
    #[arg(long, env = "STOREFRONT_PREFIX_WINDOW_SIZE", default_value = "100")]
    pub prefix_window_size: Option<u32>,

    /// Maximum hits for range searches.
    #[arg(long, env = "STOREFRONT_RANGE_WINDOW_SIZE", default_value = "100")]
    pub range_window_size: Option<u32>,

    /// Maximum hits for full scans (engine default when unset).
    #[arg(long, env = "STOREFRONT_MATCH_ALL_WINDOW_SIZE")]
    pub match_all_window_size: Option<u32>,

    /// Maximum hits for wildcard searches (engine default when unset).
    #[arg(long, env = "STOREFRONT_WILDCARD_WINDOW_SIZE")]
    pub wildcard_window_size: Option<u32>,

    /// Maximum hits for fuzzy searches (engine default when unset).
    #[arg(long, env = "STOREFRONT_FUZZY_WINDOW_SIZE")]
    pub fuzzy_window_size: Option<u32>,

    /// Maximum products returned by the product listing (engine default when unset).
    #[arg(long, env = "STOREFRONT_PRODUCTS_LIST_SIZE")]
    pub products_list_size: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let windows = WindowConfig::default();
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            storage_backend: StorageBackendMode::Elasticsearch.to_string(),
            elasticsearch_nodes: "http://localhost:9200".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
            elasticsearch_token: None,
            elasticsearch_insecure: false,
            ecommerce_index: DEFAULT_ECOMMERCE_INDEX.to_string(),
            products_index: DEFAULT_PRODUCTS_INDEX.to_string(),
            term_window_size: windows.term,
            terms_window_size: windows.terms,
            prefix_window_size: windows.prefix,
            range_window_size: windows.range,
            match_all_window_size: windows.match_all,
            wildcard_window_size: windows.wildcard,
            fuzzy_window_size: windows.fuzzy,
            products_list_size: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage_backend.parse()
    }

    /// Returns the configured Elasticsearch node URLs.
    pub fn elasticsearch_node_list(&self) -> Vec<String> {
        self.elasticsearch_nodes
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Returns the per-search window sizes.
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            term: self.term_window_size,
            terms: self.terms_window_size,
            prefix: self.prefix_window_size,
            range: self.range_window_size,
            match_all: self.match_all_window_size,
            wildcard: self.wildcard_window_size,
            fuzzy: self.fuzzy_window_size,
        }
    }

    /// Returns the e-commerce repository configuration.
    pub fn repository_config(&self) -> RepositoryConfig {
        RepositoryConfig {
            index: self.ecommerce_index.clone(),
            fields: ECommerceFields::default(),
            windows: self.window_config(),
        }
    }

    /// Builds the Elasticsearch client configuration.
    ///
    /// Basic auth wins over a bearer token when both are set; [`validate`](Self::validate)
    /// rejects that combination.
    #[cfg(feature = "elasticsearch")]
    pub fn elasticsearch_config(&self) -> ElasticsearchConfig {
        let auth = match (
            &self.elasticsearch_username,
            &self.elasticsearch_password,
            &self.elasticsearch_token,
        ) {
            (Some(username), Some(password), _) => Some(ElasticsearchAuth::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            (_, _, Some(token)) => Some(ElasticsearchAuth::Bearer {
                token: token.clone(),
            }),
            _ => None,
        };

        ElasticsearchConfig {
            nodes: self.elasticsearch_node_list(),
            request_timeout_ms: self.request_timeout.saturating_mul(1000),
            auth,
            disable_certificate_validation: self.elasticsearch_insecure,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        match self.storage_backend_mode() {
            Ok(StorageBackendMode::Elasticsearch) => self.validate_elasticsearch(&mut errors),
            Ok(StorageBackendMode::Memory) => {}
            Err(e) => errors.push(e),
        }

        if self.ecommerce_index.trim().is_empty() {
            errors.push("E-commerce index name cannot be empty".to_string());
        }

        if self.products_index.trim().is_empty() {
            errors.push("Products index name cannot be empty".to_string());
        }

        let windows = [
            ("term", self.term_window_size),
            ("terms", self.terms_window_size),
            ("prefix", self.prefix_window_size),
            ("range", self.range_window_size),
            ("match-all", self.match_all_window_size),
            ("wildcard", self.wildcard_window_size),
            ("fuzzy", self.fuzzy_window_size),
            ("products list", self.products_list_size),
        ];
        for (name, size) in windows {
            if size == Some(0) {
                errors.push(format!("The {} window size cannot be 0", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_elasticsearch(&self, errors: &mut Vec<String>) {
        let nodes = self.elasticsearch_node_list();
        if nodes.is_empty() {
            errors.push("At least one Elasticsearch node is required".to_string());
        }
        for node in &nodes {
            if !node.starts_with("http://") && !node.starts_with("https://") {
                errors.push(format!(
                    "Elasticsearch node '{}' must start with http:// or https://",
                    node
                ));
            }
        }

        match (&self.elasticsearch_username, &self.elasticsearch_password) {
            (Some(_), None) => {
                errors.push("Elasticsearch username is set without a password".to_string())
            }
            (None, Some(_)) => {
                errors.push("Elasticsearch password is set without a username".to_string())
            }
            (Some(_), Some(_)) if self.elasticsearch_token.is_some() => errors.push(
                "Configure either Elasticsearch basic auth or a bearer token, not both".to_string(),
            ),
            _ => {}
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, the in-memory backend, and disables
    /// features that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            storage_backend: StorageBackendMode::Memory.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.enable_cors);
        assert_eq!(
            config.storage_backend_mode(),
            Ok(StorageBackendMode::Elasticsearch)
        );
        assert_eq!(config.ecommerce_index, "kibana_sample_data_ecommerce");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_unknown_backend() {
        let config = ServerConfig {
            storage_backend: "cassandra".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("cassandra")));
    }

    #[test]
    fn test_validate_partial_credentials() {
        let config = ServerConfig {
            elasticsearch_username: Some("elastic".to_string()),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("without a password")));
    }

    #[test]
    fn test_validate_conflicting_auth() {
        let config = ServerConfig {
            elasticsearch_username: Some("elastic".to_string()),
            elasticsearch_password: Some("changeme".to_string()),
            elasticsearch_token: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_node_scheme() {
        let config = ServerConfig {
            elasticsearch_nodes: "localhost:9200".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // nodes are not checked when the memory backend is selected
        let config = ServerConfig {
            elasticsearch_nodes: String::new(),
            storage_backend: "memory".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_window() {
        let config = ServerConfig {
            fuzzy_window_size: Some(0),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("fuzzy")));
    }

    #[test]
    fn test_backend_mode_parsing() {
        assert_eq!(
            "Memory".parse::<StorageBackendMode>(),
            Ok(StorageBackendMode::Memory)
        );
        assert_eq!(
            "es".parse::<StorageBackendMode>(),
            Ok(StorageBackendMode::Elasticsearch)
        );
        assert!("sqlite".parse::<StorageBackendMode>().is_err());
        assert_eq!(StorageBackendMode::Memory.to_string(), "memory");
    }

    #[test]
    fn test_repository_config_follows_settings() {
        let config = ServerConfig {
            ecommerce_index: "orders".to_string(),
            terms_window_size: Some(50),
            match_all_window_size: Some(20),
            ..Default::default()
        };
        let repository = config.repository_config();
        assert_eq!(repository.index, "orders");
        assert_eq!(repository.windows.terms, Some(50));
        assert_eq!(repository.windows.match_all, Some(20));
        assert_eq!(repository.windows.term, None);
    }

    #[cfg(feature = "elasticsearch")]
    #[test]
    fn test_elasticsearch_config() {
        let config = ServerConfig {
            elasticsearch_nodes: "https://es1:9200, https://es2:9200".to_string(),
            elasticsearch_username: Some("elastic".to_string()),
            elasticsearch_password: Some("changeme".to_string()),
            request_timeout: 10,
            ..Default::default()
        };
        let es = config.elasticsearch_config();
        assert_eq!(es.nodes, vec!["https://es1:9200", "https://es2:9200"]);
        assert_eq!(es.request_timeout_ms, 10_000);
        assert!(matches!(es.auth, Some(ElasticsearchAuth::Basic { .. })));

        let config = ServerConfig {
            elasticsearch_token: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.elasticsearch_config().auth,
            Some(ElasticsearchAuth::Bearer { .. })
        ));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.storage_backend_mode(), Ok(StorageBackendMode::Memory));
    }
}
