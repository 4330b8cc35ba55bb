use std::path::PathBuf;

use crate::prelude::*;

use super::GenerateOptions;

/// Generator configuration, constructed once at startup and passed down to
/// the orchestrator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the chat-completion endpoint.
    pub endpoint: String,
    /// Model identifier submitted with every request.
    pub model: String,
    /// Bearer credential for the endpoint.
    pub api_token: String,
    /// Root of the C++ project being scanned.
    pub project_root: PathBuf,
    /// Explicit output directory, if any. See [`GeneratorConfig::output_dir`].
    pub output_dir: Option<PathBuf>,
    /// Directory holding prompt templates.
    pub prompts_dir: PathBuf,
}

impl GeneratorConfig {
    /// Default chat-completion endpoint (GitHub Models)
    pub const DEFAULT_ENDPOINT: &'static str = "https://models.github.ai/inference";

    /// Default model identifier
    pub const DEFAULT_MODEL: &'static str = "xai/grok-3";

    /// Default project root to scan
    pub const DEFAULT_PROJECT_ROOT: &'static str = "../orgChartApi";

    /// Default prompt template directory
    pub const DEFAULT_PROMPTS_DIR: &'static str = "prompts";

    /// Load configuration from environment variables.
    ///
    /// `GITHUB_TOKEN` is required; everything else falls back to the
    /// defaults above. Called before any client is constructed, so a
    /// missing credential aborts the run before a single network call.
    pub fn from_env() -> Result<Self, Error> {
        let api_token = std::env::var("GITHUB_TOKEN").map_err(|_| {
            Error::Credential("GITHUB_TOKEN environment variable not set".to_string())
        })?;

        Ok(Self {
            endpoint: std::env::var("TESTGEN_ENDPOINT")
                .unwrap_or_else(|_| Self::DEFAULT_ENDPOINT.to_string()),
            model: std::env::var("TESTGEN_MODEL")
                .unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string()),
            api_token,
            project_root: std::env::var_os("TESTGEN_PROJECT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PROJECT_ROOT)),
            output_dir: std::env::var_os("TESTGEN_OUTPUT_DIR").map(PathBuf::from),
            prompts_dir: std::env::var_os("TESTGEN_PROMPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PROMPTS_DIR)),
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, options: &GenerateOptions) -> Self {
        if let Some(endpoint) = &options.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(model) = &options.model {
            self.model = model.clone();
        }
        if let Some(project_root) = &options.project_root {
            self.project_root = project_root.clone();
        }
        if let Some(output_dir) = &options.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(prompts_dir) = &options.prompts_dir {
            self.prompts_dir = prompts_dir.clone();
        }
        self
    }

    /// Output directory, defaulting to `generated_tests` under the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.project_root.join("generated_tests"))
    }

    /// Source directory for one component kind.
    pub fn component_dir(&self, kind: &str) -> PathBuf {
        self.project_root.join(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_config() -> GeneratorConfig {
        GeneratorConfig {
            endpoint: GeneratorConfig::DEFAULT_ENDPOINT.to_string(),
            model: GeneratorConfig::DEFAULT_MODEL.to_string(),
            api_token: "token".to_string(),
            project_root: PathBuf::from("/proj"),
            output_dir: None,
            prompts_dir: PathBuf::from("prompts"),
        }
    }

    // Environment access is confined to this single test so the other
    // tests in this crate can run in parallel without touching it.
    #[test]
    fn test_from_env_requires_credential() {
        std::env::remove_var("GITHUB_TOKEN");

        let err = GeneratorConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Credential(_)));

        std::env::set_var("GITHUB_TOKEN", "secret");
        std::env::remove_var("TESTGEN_ENDPOINT");
        std::env::remove_var("TESTGEN_MODEL");
        std::env::remove_var("TESTGEN_PROJECT_ROOT");
        std::env::remove_var("TESTGEN_OUTPUT_DIR");
        std::env::remove_var("TESTGEN_PROMPTS_DIR");

        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.endpoint, GeneratorConfig::DEFAULT_ENDPOINT);
        assert_eq!(config.model, GeneratorConfig::DEFAULT_MODEL);
        assert_eq!(
            config.project_root,
            PathBuf::from(GeneratorConfig::DEFAULT_PROJECT_ROOT)
        );
        assert!(config.output_dir.is_none());

        std::env::remove_var("GITHUB_TOKEN");
    }

    #[test]
    fn test_output_dir_defaults_under_project_root() {
        let config = fixture_config();
        assert_eq!(config.output_dir(), PathBuf::from("/proj/generated_tests"));
    }

    #[test]
    fn test_output_dir_override_wins() {
        let mut config = fixture_config();
        config.output_dir = Some(PathBuf::from("/elsewhere"));
        assert_eq!(config.output_dir(), PathBuf::from("/elsewhere"));
    }

    #[test]
    fn test_component_dir() {
        let config = fixture_config();
        assert_eq!(
            config.component_dir("controllers"),
            PathBuf::from("/proj/controllers")
        );
    }

    #[test]
    fn test_with_overrides() {
        let options = GenerateOptions {
            project_root: Some(PathBuf::from("/other")),
            output_dir: None,
            prompts_dir: None,
            endpoint: Some("http://localhost:8080".to_string()),
            model: Some("test-model".to_string()),
            json: false,
        };

        let config = fixture_config().with_overrides(&options);
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.project_root, PathBuf::from("/other"));
        // The derived output location follows the overridden root.
        assert_eq!(config.output_dir(), PathBuf::from("/other/generated_tests"));
        assert_eq!(config.prompts_dir, PathBuf::from("prompts"));
    }
}
