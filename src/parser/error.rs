use thiserror::Error;

/// Errors raised while extracting descriptors from compiler output.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{node} is missing required field `{field}`")]
    MissingField { node: String, field: &'static str },

    #[error("{node} field `{field}` should be {expected}")]
    InvalidField {
        node: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("input is neither a solc AST, standard-JSON output, build-info file, nor JSON ABI")]
    UnrecognizedInput,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    pub fn missing(node: impl Into<String>, field: &'static str) -> Self {
        ParseError::MissingField {
            node: node.into(),
            field,
        }
    }

    pub fn invalid(node: impl Into<String>, field: &'static str, expected: &'static str) -> Self {
        ParseError::InvalidField {
            node: node.into(),
            field,
            expected,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
