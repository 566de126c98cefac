use thiserror::Error;

const EPSILON_VAR: &str = "DEEPCMP_EPSILON";
const IGNORE_CASE_VAR: &str = "DEEPCMP_IGNORE_CASE";
const PROMPT_VAR: &str = "DEEPCMP_PROMPT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Variable `{0}` must be a number, found `{1}`")]
    InvalidNumber(&'static str, String),

    #[error("Variable `{0}` must be one of true, false, 1, 0, found `{1}`")]
    InvalidBool(&'static str, String),
}

/// Defaults applied to every command that does not override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_epsilon: Option<f64>,
    pub ignore_case: bool,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_epsilon: None,
            ignore_case: false,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(raw) = lookup(EPSILON_VAR) {
            let epsilon = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidNumber(EPSILON_VAR, raw.clone()))?;
            config.default_epsilon = Some(epsilon);
        }

        if let Some(raw) = lookup(IGNORE_CASE_VAR) {
            config.ignore_case = match raw.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidBool(IGNORE_CASE_VAR, raw)),
            };
        }

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        Ok(config)
    }
}
