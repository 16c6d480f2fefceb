/// Client-side settings: where the API lives and which session to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Session JWT sent as `Authorization: Bearer <token>`.
    pub session_token: Option<String>,
}

pub const API_URL_VAR: &str = "KEYRACE_API_URL";
pub const SESSION_TOKEN_VAR: &str = "KEYRACE_SESSION_TOKEN";

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            session_token: None,
        }
    }

    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Reads [`API_URL_VAR`] and [`SESSION_TOKEN_VAR`] from `vars`, keeping
    /// the defaults for anything unset or empty.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                API_URL_VAR => config.api_base_url = value.trim_end_matches('/').to_owned(),
                SESSION_TOKEN_VAR => config.session_token = Some(value),
                _ => {}
            }
        }
        config
    }

    /// Base URL of the `/api` mount.
    pub fn api_url(&self) -> String {
        if self.api_base_url.is_empty() {
            "/api".to_owned()
        } else {
            format!("{}/api", self.api_base_url)
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// `Authorization` header value for the current session, if any.
    pub fn authorization(&self) -> Option<String> {
        self.session_token().map(|token| format!("Bearer {token}"))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://127.0.0.1:8080".to_owned()
            },
            session_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_mount() {
        assert_eq!(BusinessConfig::new(String::new()).api_url(), "/api");
        assert_eq!(
            BusinessConfig::new("https://keyrace.dev".to_owned()).api_url(),
            "https://keyrace.dev/api"
        );
    }

    #[test]
    fn reads_vars_and_ignores_empty_ones() {
        let config = BusinessConfig::from_vars([
            (API_URL_VAR, "https://keyrace.dev/"),
            (SESSION_TOKEN_VAR, ""),
            ("UNRELATED", "x"),
        ]);
        assert_eq!(config.api_base_url, "https://keyrace.dev");
        assert_eq!(config.session_token(), None);

        let config = BusinessConfig::from_vars([(SESSION_TOKEN_VAR, "jwt")]);
        assert_eq!(config.authorization().as_deref(), Some("Bearer jwt"));
    }
}
