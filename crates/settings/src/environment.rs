use crate::conventions::ENVIRONMENT_VAR;
use crate::source::EnvSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The deployment environment an application is running in.
///
/// The three well-known names parse case-insensitively; anything else is
/// preserved verbatim as [`RuntimeEnv::Custom`] because the overlay file is
/// selected by name and unknown names must round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuntimeEnv {
    Development,
    Staging,
    Production,
    Custom(String),
}

impl RuntimeEnv {
    /// Reads the environment name from [`ENVIRONMENT_VAR`].
    ///
    /// An unset or empty variable yields the default environment; it must
    /// never switch a deployment into a development posture.
    #[must_use]
    pub fn detect(source: &impl EnvSource) -> Self {
        source.var(ENVIRONMENT_VAR).map_or_else(Self::default, |raw| Self::parse(&raw))
    }

    /// Parses an environment name, matching the well-known trio
    /// case-insensitively and keeping anything else verbatim.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let name = raw.trim();
        if name.is_empty() {
            Self::default()
        } else if name.eq_ignore_ascii_case("development") {
            Self::Development
        } else if name.eq_ignore_ascii_case("staging") {
            Self::Staging
        } else if name.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Custom(name.to_owned())
        }
    }

    /// The canonical name, as inserted into the overlay file name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Development => "Development",
            Self::Staging => "Staging",
            Self::Production => "Production",
            Self::Custom(name) => name,
        }
    }

    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Default for RuntimeEnv {
    fn default() -> Self {
        Self::Production
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for RuntimeEnv {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for RuntimeEnv {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<RuntimeEnv> for String {
    fn from(environment: RuntimeEnv) -> Self {
        match environment {
            RuntimeEnv::Custom(name) => name,
            other => other.name().to_owned(),
        }
    }
}
