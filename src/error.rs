//! Error types for document loading and validation

use thiserror::Error;

/// Errors that can occur while loading or validating a diagram document
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read the document from disk
    #[error("failed to read diagram file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid TOML or does not match the schema
    #[error("failed to parse diagram TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two elements of the same kind share an id
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// A port names a node that does not exist
    #[error("port '{port}' references undefined node '{node}'")]
    UnknownNode {
        port: String,
        node: String,
        suggestions: Vec<String>,
    },

    /// A link names a relation that does not exist
    #[error("link references undefined relation '{relation}'")]
    UnknownRelation {
        relation: String,
        suggestions: Vec<String>,
    },

    /// A link endpoint resolves to neither a port nor a relation vertex
    #[error("link endpoint '{endpoint}' matches no port or vertex")]
    UnknownEndpoint {
        endpoint: String,
        suggestions: Vec<String>,
    },
}

impl ModelError {
    /// Create a duplicate id error
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Create an unknown node error with suggestions
    pub fn unknown_node(
        port: impl Into<String>,
        node: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self::UnknownNode {
            port: port.into(),
            node: node.into(),
            suggestions,
        }
    }

    /// Create an unknown relation error with suggestions
    pub fn unknown_relation(relation: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownRelation {
            relation: relation.into(),
            suggestions,
        }
    }

    /// Create an unknown endpoint error with suggestions
    pub fn unknown_endpoint(endpoint: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownEndpoint {
            endpoint: endpoint.into(),
            suggestions,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownNode { suggestions, .. } => Some(suggestions),
            Self::UnknownRelation { suggestions, .. } => Some(suggestions),
            Self::UnknownEndpoint { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = ModelError::duplicate("node", "source");
        assert!(err.to_string().contains("duplicate node id 'source'"));
    }

    #[test]
    fn test_unknown_endpoint_carries_suggestions() {
        let err = ModelError::unknown_endpoint("src.ot", vec!["src.out".to_string()]);
        assert!(err.to_string().contains("src.ot"));
        assert_eq!(err.suggestions(), Some(&["src.out".to_string()][..]));
    }

    #[test]
    fn test_io_error_has_no_suggestions() {
        let err = ModelError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.suggestions().is_none());
    }
}
