// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while loading or serializing tracekeep configuration.
///
/// Carries the underlying cause and any context added on the way up. `{:#}` prints the
/// whole chain.
#[repr(transparent)]
pub struct Error {
    inner: anyhow::Error,
}

impl Error {
    /// Wraps the error with a higher level description
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Self {
            inner: self.inner.context(context),
        }
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Sync + Send + 'static,
{
    fn from(error: E) -> Self {
        Self {
            inner: anyhow::Error::new(error),
        }
    }
}

impl From<Error> for Box<dyn std::error::Error + Send + Sync> {
    fn from(error: Error) -> Box<dyn std::error::Error + Send + Sync> {
        error.inner.into()
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::Result;

    fn parse(s: &str) -> Result<f64> {
        Ok(s.parse::<f64>()?)
    }

    #[test]
    fn test_from_std_error() {
        let err = parse("not-a-number").unwrap_err();
        assert_eq!(err.to_string(), "invalid float literal");
    }

    #[test]
    fn test_context_chain() {
        let err = parse("abc")
            .map_err(|e| e.context("invalid TRACER_SAMPLING_FRACTION"))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid TRACER_SAMPLING_FRACTION");
        assert_eq!(
            format!("{err:#}"),
            "invalid TRACER_SAMPLING_FRACTION: invalid float literal"
        );
    }

    #[test]
    fn test_into_boxed_error() {
        let err = parse("x").unwrap_err();
        let boxed: Box<dyn std::error::Error + Send + Sync> = err.into();
        assert_eq!(boxed.to_string(), "invalid float literal");
    }
}
