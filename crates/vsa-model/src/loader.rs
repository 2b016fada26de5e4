//! Backend selection with a single load-time fallback.

use vsa_config::ModelConfig;

use crate::error::ModelError;
use crate::kind::BackendKind;
use crate::transformer::TransformerBackend;

/// Load `primary`; if that fails and `fallback` is set, try its alternate once.
///
/// Returns the kind that actually loaded alongside the value. `load` is the
/// per-kind constructor, so callers and tests can plug in their own.
///
/// # Errors
///
/// Returns the primary's error when fallback is off, otherwise
/// [`ModelError::AllBackendsFailed`] when both attempts fail.
pub fn load_with_fallback<T, F>(
    primary: BackendKind,
    fallback: bool,
    mut load: F,
) -> Result<(BackendKind, T), ModelError>
where
    F: FnMut(BackendKind) -> Result<T, ModelError>,
{
    let primary_error = match load(primary) {
        Ok(value) => return Ok((primary, value)),
        Err(e) if !fallback => return Err(e),
        Err(e) => e,
    };

    let alternate = primary.alternate();
    tracing::warn!(
        backend = %primary,
        error = %primary_error,
        alternate = %alternate,
        "backend failed to load, trying alternate"
    );
    match load(alternate) {
        Ok(value) => Ok((alternate, value)),
        Err(alternate_error) => Err(ModelError::AllBackendsFailed {
            primary: primary.to_string(),
            primary_error: primary_error.to_string(),
            alternate: alternate.to_string(),
            alternate_error: alternate_error.to_string(),
        }),
    }
}

/// Load the backend named in `config`, honoring its fallback setting.
///
/// # Errors
///
/// Returns [`ModelError::UnknownBackend`] for an unrecognized identifier, or
/// any load error per [`load_with_fallback`].
pub fn load_backend(config: &ModelConfig) -> Result<TransformerBackend, ModelError> {
    let kind: BackendKind = config.backend.parse()?;
    let cache_dir = config.resolved_cache_dir();
    let (_, backend) = load_with_fallback(kind, config.fallback, |k| {
        TransformerBackend::load(k, &cache_dir, config.max_length)
    })?;
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fail(kind: BackendKind) -> ModelError {
        ModelError::Download(format!("{kind} unreachable"))
    }

    #[test]
    fn primary_success_skips_alternate() {
        let mut attempts = Vec::new();
        let (kind, value) = load_with_fallback(BackendKind::ModernBertBase, true, |k| {
            attempts.push(k);
            Ok::<_, ModelError>(k.as_str())
        })
        .unwrap();
        assert_eq!(kind, BackendKind::ModernBertBase);
        assert_eq!(value, "modernbert-base");
        assert_eq!(attempts, vec![BackendKind::ModernBertBase]);
    }

    #[test]
    fn primary_failure_falls_back_once() {
        let mut attempts = Vec::new();
        let (kind, ()) = load_with_fallback(BackendKind::ModernBertLarge, true, |k| {
            attempts.push(k);
            if k == BackendKind::ModernBertLarge {
                Err(fail(k))
            } else {
                Ok(())
            }
        })
        .unwrap();
        assert_eq!(kind, BackendKind::ModernBertBase);
        assert_eq!(
            attempts,
            vec![BackendKind::ModernBertLarge, BackendKind::ModernBertBase]
        );
    }

    #[test]
    fn both_failing_is_fatal() {
        let mut attempts = 0;
        let err = load_with_fallback(BackendKind::ModernBertBase, true, |k| {
            attempts += 1;
            Err::<(), _>(fail(k))
        })
        .unwrap_err();
        assert_eq!(attempts, 2);
        match err {
            ModelError::AllBackendsFailed {
                primary, alternate, ..
            } => {
                assert_eq!(primary, "modernbert-base");
                assert_eq!(alternate, "modernbert-large");
            }
            other => panic!("expected AllBackendsFailed, got {other:?}"),
        }
    }

    #[test]
    fn fallback_disabled_returns_primary_error() {
        let mut attempts = 0;
        let err = load_with_fallback(BackendKind::ModernBertBase, false, |k| {
            attempts += 1;
            Err::<(), _>(fail(k))
        })
        .unwrap_err();
        assert_eq!(attempts, 1);
        assert!(matches!(err, ModelError::Download(_)));
    }

    #[test]
    fn unknown_backend_in_config_fails_before_loading() {
        let config = ModelConfig {
            backend: "phobert".to_string(),
            ..ModelConfig::default()
        };
        assert!(matches!(
            load_backend(&config),
            Err(ModelError::UnknownBackend(_))
        ));
    }
}
