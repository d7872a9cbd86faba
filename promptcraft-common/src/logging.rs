//! Log formatting helpers.

use serde::Serialize;
use std::fmt;

/// Renders a serializable value as indented YAML inside a log line
///
/// Intended for tracing statements where a multi-field value (a filter, a
/// record) is easier to read as YAML than as `Debug` output:
///
/// ```ignore
/// debug!("prompt criteria:\n{}", Pretty(&filter));
/// ```
///
/// Falls back to `Debug` formatting if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + fmt::Debug> fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "{}", yaml),
            Err(_) => write!(f, "{:#?}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    #[test]
    fn test_pretty_formats_as_yaml() {
        let sample = Sample {
            name: "test".to_string(),
            count: 3,
        };
        let rendered = format!("{}", Pretty(&sample));
        assert!(rendered.contains("name: test"));
        assert!(rendered.contains("count: 3"));
    }

    #[test]
    fn test_pretty_borrows() {
        let sample = Sample {
            name: "borrowed".to_string(),
            count: 1,
        };
        let _ = format!("{}", Pretty(&sample));
        assert_eq!(sample.count, 1);
    }
}
