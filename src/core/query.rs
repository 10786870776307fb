use serde::Serialize;
use serde_json::{Map, Value};

/// An immutable GraphQL operation: the query document plus a set of default
/// variables fixed at construction.
///
/// The operation name is extracted from the leading `query <Name>` declaration
/// of the document. A document without one is not an error; the server infers
/// the operation.
#[derive(Clone)]
pub struct GraphQlQuery {
    document: String,
    operation: Option<String>,
    default_variables: Map<String, Value>,
}

/// One request body, built per call from a [`GraphQlQuery`] and the caller's
/// variables. Serializes as `{"query": ..., "variables": ...}`.
#[derive(Serialize)]
pub struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Map<String, Value>,
}

impl GraphQlQuery {
    /// Creates a descriptor for the given query document, with no default variables.
    pub fn new(document: impl Into<String>) -> Self {
        let document = document.into();
        let operation = parse_operation_name(&document);
        Self {
            document,
            operation,
            default_variables: Map::new(),
        }
    }

    /// Registers a default variable, overridden per call when the caller
    /// supplies the same name.
    #[must_use]
    pub fn default_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_variables.insert(name.into(), value.into());
        self
    }

    /// The operation name parsed from the document, if it declares one.
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// The full query document text.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Builds the request body for one call.
    ///
    /// `variables` is merged over the default variables one level deep: a
    /// caller value replaces a default value wholesale on name collision,
    /// nested objects are not merged recursively.
    pub fn build(&self, variables: Map<String, Value>) -> GraphQlRequest<'_> {
        let mut merged = self.default_variables.clone();
        merged.extend(variables);
        GraphQlRequest {
            query: &self.document,
            variables: merged,
        }
    }
}

/// Prefix scan for `query <Name>`; the keyword match is ASCII case-insensitive.
fn parse_operation_name(document: &str) -> Option<String> {
    let rest = document.trim_start();
    let keyword = rest.get(..5)?;
    if !keyword.eq_ignore_ascii_case("query") {
        return None;
    }
    let after_keyword = &rest[5..];
    let name_start = after_keyword.trim_start();
    // The keyword needs trailing whitespace, otherwise this is a field called "query...".
    if name_start.len() == after_keyword.len() {
        return None;
    }
    let name: String = name_start
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}
