use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub anthropic: AnthropicSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct AnthropicSettings {
    /// API credential for the Anthropic Messages API. Never stored in the
    /// config file; populated from the environment. A missing key is not a
    /// configuration error - requests fail individually until it is set.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    /// Model identifier sent upstream (e.g., claude-3-5-sonnet-20241022).
    #[serde(default = "default_model")]
    pub model: String,
    /// Completion length cap for the upstream request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
}

fn default_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_max_tokens() -> i32 {
    2000
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in analyzer-service directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("analyzer-service") {
        base_path.join("config")
    } else {
        base_path.join("analyzer-service").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings = settings.try_deserialize::<Settings>()?;

    // ANTHROPIC_API_KEY is the conventional variable for this credential;
    // an APP_ANTHROPIC__API_KEY override still wins when both are set.
    if settings.anthropic.api_key.is_none() {
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            if !key.is_empty() {
                settings.anthropic.api_key = Some(Secret::new(key));
            }
        }
    }

    Ok(settings)
}
