use thiserror::Error;

/// Failure to turn a navigation request into a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route registered for page '{page}' in locale '{locale}'")]
    UnknownRoute { page: String, locale: String },

    #[error("route pattern '{pattern}' needs a value for ':{name}'")]
    MissingParameter { pattern: String, name: String },
}

/// The route table failed validation at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid route table: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_route_message() {
        let err = RouteError::UnknownRoute {
            page: "dinosaur".to_string(),
            locale: "es".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no route registered for page 'dinosaur' in locale 'es'"
        );
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = RouteError::MissingParameter {
            pattern: "/dinosaur/:name".to_string(),
            name: "name".to_string(),
        };
        assert!(err.to_string().contains(":name"));
    }

    #[test]
    fn test_table_error_lists_all_problems() {
        let err = TableError::Invalid(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "invalid route table: first; second");
    }
}
