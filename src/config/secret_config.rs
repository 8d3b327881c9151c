/// Defines the source type for a secret
#[derive(Debug, Clone)]
pub enum SecretType {
    /// Load from environment variable
    EnvVar { name: String },
}

impl SecretType {
    pub fn name(&self) -> &str {
        match self {
            SecretType::EnvVar { name } => name,
        }
    }
}

/// Configuration for a single secret
pub struct SecretConfig {
    /// Secret type (where to load from)
    pub secret_type: SecretType,
    /// Whether this secret is required
    pub required: bool,
    /// Minimum length (None = no minimum)
    pub min_length: Option<usize>,
}

impl SecretConfig {
    pub fn env_var(name: &str) -> Self {
        Self {
            secret_type: SecretType::EnvVar {
                name: name.to_string(),
            },
            required: true,
            min_length: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }
}
