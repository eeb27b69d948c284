use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain-specific error set for the planner core and its surroundings.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Dates, hours, weekdays, CLI values that could not be read.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Domain -------------------------------------------------------------
    /// A form draft that is not allowed to be submitted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A todo whose inclusive day span exceeds the configured maximum.
    #[error("Todo {todo_id} spans {days} day(s), more than the allowed {max}.")]
    RangeTooLarge { todo_id: i64, days: i64, max: u32 },

    /// Lookup of a record that the store does not hold.
    #[error("{kind} with id {id} not found.")]
    NotFound { kind: &'static str, id: i64 },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (invalid JSON, bad value, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic domain error when you want to bubble a message without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (snapshot and config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config and snapshot encode/decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_constructor_wraps_message() {
        let err = Error::parse("bad date");
        match err {
            Error::Parse(msg) => assert_eq!(msg, "bad date"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn validation_constructor_wraps_message() {
        let err = Error::validation("title is empty");
        match err {
            Error::Validation(msg) => assert_eq!(msg, "title is empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn config_constructor_wraps_message() {
        let err = Error::config("config missing");
        match err {
            Error::Config(msg) => assert_eq!(msg, "config missing"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn require_parse_returns_value_when_present() {
        let value = require_parse(Some(4), "missing").unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn require_parse_errors_with_message_when_missing() {
        let err = require_parse::<i32, _>(None, "missing").unwrap_err();
        match err {
            Error::Parse(msg) => assert_eq!(msg, "missing"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn range_too_large_formats_message() {
        let err = Error::RangeTooLarge {
            todo_id: 7,
            days: 5000,
            max: 3660,
        };
        assert_eq!(
            err.to_string(),
            "Todo 7 spans 5000 day(s), more than the allowed 3660."
        );
    }

    #[test]
    fn not_found_formats_message() {
        let err = Error::NotFound {
            kind: "Schedule",
            id: 3,
        };
        assert_eq!(err.to_string(), "Schedule with id 3 not found.");
    }

    #[test]
    fn domain_error_displays_raw_message() {
        let err = Error::Domain("oops".to_string());
        assert_eq!(err.to_string(), "oops");
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let err = Error::from(raw);
        assert_eq!(err.to_string(), "I/O error: disk");
    }

    #[test]
    fn json_error_formats_message() {
        let raw = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let expected = format!("JSON error: {}", raw);
        let err = Error::from(raw);
        assert_eq!(err.to_string(), expected);
    }
}
