use crate::api::FetchError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match error {
            // Temporary: tunnel or server hiccups
            FetchError::Http { status } if (500..=599).contains(status) => LogLevel::Warn,
            FetchError::Reqwest(_) => LogLevel::Warn,

            // Needs attention on the server side: missing workbook, wrong route, bad payload
            FetchError::Http { .. } => LogLevel::Error,
            FetchError::Server(_) => LogLevel::Error,
            FetchError::Decode(_) => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_fetch_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_fetch_error(&FetchError::Http { status: 502 }),
            LogLevel::Warn
        );
        assert_eq!(
            classifier.classify_fetch_error(&FetchError::Http { status: 404 }),
            LogLevel::Error
        );
        assert_eq!(
            classifier.classify_fetch_error(&FetchError::Server("boom".to_string())),
            LogLevel::Error
        );
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    }
}
