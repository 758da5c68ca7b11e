//! In-memory model of a parsed API specification.
//!
//! The model is produced by an external loader and handed to rules
//! read-only. Paths and the verbs under them keep the loader's enumeration
//! order; nothing here sorts or deduplicates. Absent `produces`/`consumes`
//! sections deserialize as empty sequences rather than errors.

use serde::{Deserialize, Serialize};

/// A parsed API specification: an ordered collection of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpec {
    /// Paths in enumeration order, e.g. `/pets` before `/pets/{id}`.
    #[serde(default)]
    pub paths: Vec<PathEntry>,
}

impl ApiSpec {
    /// Creates an empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path with its operations.
    #[must_use]
    pub fn path(mut self, name: impl Into<String>, operations: Vec<OperationEntry>) -> Self {
        self.paths.push(PathEntry {
            name: name.into(),
            operations,
        });
        self
    }

    /// Iterates over `(path name, verb, operation)` triples in
    /// enumeration order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
        self.paths.iter().flat_map(|path| {
            path.operations
                .iter()
                .map(move |entry| (path.name.as_str(), entry.verb.as_str(), &entry.operation))
        })
    }
}

/// One path and the operations declared under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Path name as written in the specification (e.g. `/orders`).
    pub name: String,
    /// Operations keyed by HTTP verb, in enumeration order.
    #[serde(default)]
    pub operations: Vec<OperationEntry>,
}

/// One HTTP verb under a path, with its operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEntry {
    /// HTTP verb as the loader spelled it (e.g. `GET`).
    pub verb: String,
    /// The operation body.
    #[serde(default)]
    pub operation: Operation,
}

impl OperationEntry {
    /// Creates an entry for `verb` with the given operation.
    #[must_use]
    pub fn new(verb: impl Into<String>, operation: Operation) -> Self {
        Self {
            verb: verb.into(),
            operation,
        }
    }
}

/// Media-type declarations of a single operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Response media types, in declaration order.
    #[serde(default)]
    pub produces: Vec<String>,
    /// Request media types, in declaration order.
    #[serde(default)]
    pub consumes: Vec<String>,
}

impl Operation {
    /// Creates an operation with no declared media types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response media types.
    #[must_use]
    pub fn produces<I, S>(mut self, media_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces = media_types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the request media types.
    #[must_use]
    pub fn consumes<I, S>(mut self, media_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consumes = media_types.into_iter().map(Into::into).collect();
        self
    }
}
