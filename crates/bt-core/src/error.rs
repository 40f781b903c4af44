use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// One-line message for `err` followed by each of its sources, `: `-separated.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("Failed to write output")]
    struct Outer {
        source: std::io::Error,
    }

    #[test]
    fn chain_uses_display_text() {
        let err = CoreError::NonFinite {
            what: "Rja",
            value: f64::INFINITY,
        };
        assert_eq!(error_chain(&err), "Non-finite numeric value for Rja: inf");
    }

    #[test]
    fn chain_appends_sources() {
        let err = Outer {
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(error_chain(&err), "Failed to write output: disk full");
    }
}
