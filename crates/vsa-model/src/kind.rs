//! Backend selection by identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The pre-trained classifiers the assistant can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// ModernBERT base (~150M parameters), multilingual sentiment head.
    #[default]
    ModernBertBase,
    /// ModernBERT large (~400M parameters), multilingual sentiment head.
    ModernBertLarge,
}

impl BackendKind {
    pub const ALL: [Self; 2] = [Self::ModernBertBase, Self::ModernBertLarge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModernBertBase => "modernbert-base",
            Self::ModernBertLarge => "modernbert-large",
        }
    }

    /// Hugging Face Hub repository holding config, weights, and tokenizer.
    #[must_use]
    pub const fn repo_id(self) -> &'static str {
        match self {
            Self::ModernBertBase => "clapAI/modernBERT-base-multilingual-sentiment",
            Self::ModernBertLarge => "clapAI/modernBERT-large-multilingual-sentiment",
        }
    }

    /// The backend tried when this one fails to load.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::ModernBertBase => Self::ModernBertLarge,
            Self::ModernBertLarge => Self::ModernBertBase,
        }
    }

    /// Identifiers of every backend, for pickers and error messages.
    #[must_use]
    pub fn identifiers() -> Vec<String> {
        Self::ALL.iter().map(|k| k.as_str().to_string()).collect()
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modernbert-base" | "base" => Ok(Self::ModernBertBase),
            "modernbert-large" | "large" => Ok(Self::ModernBertLarge),
            _ => Err(ModelError::UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("modernbert-base", BackendKind::ModernBertBase)]
    #[case("ModernBERT-Large", BackendKind::ModernBertLarge)]
    #[case(" large ", BackendKind::ModernBertLarge)]
    #[case("base", BackendKind::ModernBertBase)]
    fn parses_identifiers(#[case] input: &str, #[case] expected: BackendKind) {
        assert_eq!(input.parse::<BackendKind>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "phobert".parse::<BackendKind>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownBackend(ref s) if s == "phobert"));
    }

    #[test]
    fn alternate_is_an_involution() {
        for kind in BackendKind::ALL {
            assert_ne!(kind.alternate(), kind);
            assert_eq!(kind.alternate().alternate(), kind);
        }
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
    }

    #[test]
    fn default_is_base() {
        assert_eq!(BackendKind::default().as_str(), "modernbert-base");
        assert!(BackendKind::default().repo_id().starts_with("clapAI/"));
    }
}
