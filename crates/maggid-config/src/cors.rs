use std::time::Duration;

use serde::Deserialize;

/// CORS policy applied to every guidance route
///
/// The default mirrors what the web client needs: any origin, `POST` and
/// `OPTIONS`, and the `Content-Type` and `Authorization` request headers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    pub methods: AnyOrArray,
    /// Allowed request headers (wildcard "*" or explicit list)
    pub headers: AnyOrArray,
    /// Headers to expose to the browser
    pub expose_headers: Vec<String>,
    /// Allow credentials
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    pub max_age: Option<u64>,
    /// Allow private network access (CORS-RFC1918)
    pub private_network: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: AnyOrArray::Any,
            methods: AnyOrArray::list(&["POST", "OPTIONS"]),
            headers: AnyOrArray::list(&["Content-Type", "Authorization"]),
            expose_headers: Vec::new(),
            credentials: false,
            max_age: None,
            private_network: false,
        }
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either a wildcard "*" or explicit list of values
///
/// A list containing "*" anywhere collapses to [`AnyOrArray::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawAnyOrArray")]
pub enum AnyOrArray {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl AnyOrArray {
    /// Explicit list from string slices
    pub fn list(values: &[&str]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnyOrArray {
    One(String),
    Many(Vec<String>),
}

impl From<RawAnyOrArray> for AnyOrArray {
    fn from(raw: RawAnyOrArray) -> Self {
        let values = match raw {
            RawAnyOrArray::One(value) => vec![value],
            RawAnyOrArray::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Self::Any
        } else {
            Self::List(values)
        }
    }
}
