use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the route prefix is malformed, the timeout is
    /// invalid, a model name is blank, or the default audio parameters
    /// cannot describe PCM
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        self.validate_gemini()?;
        self.validate_models()?;
        self.validate_audio()?;
        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let prefix = &self.server.route_prefix;

        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            anyhow::bail!("server.route_prefix must start with '/' and not end with '/': '{prefix}'");
        }

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }

    fn validate_gemini(&self) -> anyhow::Result<()> {
        if self.gemini.timeout_duration()?.is_zero() {
            anyhow::bail!("gemini.timeout must be greater than 0");
        }

        Ok(())
    }

    fn validate_models(&self) -> anyhow::Result<()> {
        let blank = self.models.blank_fields();

        if !blank.is_empty() {
            anyhow::bail!("models must not be blank: {}", blank.join(", "));
        }

        Ok(())
    }

    fn validate_audio(&self) -> anyhow::Result<()> {
        self.audio
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid [audio] defaults: {e}"))
    }
}
