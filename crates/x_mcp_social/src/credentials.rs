//! OAuth 1.0a user credentials.

use x_mcp_error::{ConfigError, XMcpResult};

/// Environment variable holding the consumer (API) key.
pub const API_KEY_VAR: &str = "TWITTER_API_KEY";
/// Environment variable holding the consumer (API) secret.
pub const API_SECRET_VAR: &str = "TWITTER_API_SECRET";
/// Environment variable holding the user access token.
pub const ACCESS_TOKEN_VAR: &str = "TWITTER_ACCESS_TOKEN";
/// Environment variable holding the user access token secret.
pub const ACCESS_TOKEN_SECRET_VAR: &str = "TWITTER_ACCESS_TOKEN_SECRET";

/// All variables that must be set before the server starts.
pub const REQUIRED_VARS: [&str; 4] = [
    API_KEY_VAR,
    API_SECRET_VAR,
    ACCESS_TOKEN_VAR,
    ACCESS_TOKEN_SECRET_VAR,
];

/// The four secrets needed to sign user-context requests.
///
/// `Debug` output redacts every value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub(crate) api_key: String,
    pub(crate) api_secret: String,
    pub(crate) access_token: String,
    pub(crate) access_token_secret: String,
}

impl Credentials {
    /// Build credentials from explicit values.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every variable that is unset or
    /// empty.
    pub fn from_env() -> XMcpResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    ///
    /// # Examples
    ///
    /// ```
    /// use x_mcp_social::Credentials;
    ///
    /// let err = Credentials::from_lookup(|name| {
    ///     (name != "TWITTER_ACCESS_TOKEN").then(|| "value".to_string())
    /// })
    /// .unwrap_err();
    /// assert!(err.to_string().contains("TWITTER_ACCESS_TOKEN"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> XMcpResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values: [Option<String>; 4] =
            REQUIRED_VARS.map(|name| lookup(name).filter(|v| !v.trim().is_empty()));

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "X API credentials are required; missing: {}",
                missing.join(", ")
            ))
            .into());
        }

        let [api_key, api_secret, access_token, access_token_secret] =
            values.map(Option::unwrap_or_default);
        Ok(Self {
            api_key,
            api_secret,
            access_token,
            access_token_secret,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}
