//! Decoded documents.

use super::Variable;
use crate::config::DecodeOptions;
use crate::decode::{self, LineCursor};
use crate::error::{DecodeError, Result};
use indexmap::IndexMap;
use std::path::Path;
use std::str::FromStr;

/// All variables decoded from one ASCII response.
///
/// Built in a single pass and never mutated afterwards, so a shared
/// reference can be read from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Document {
    variables: IndexMap<String, Variable>,
}

impl Document {
    /// Decode a document with default options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &DecodeOptions::default())
    }

    /// Decode a document.
    ///
    /// Variable blocks are assembled one after another until the input is
    /// exhausted. A later block with an already seen name replaces the
    /// earlier variable.
    pub fn parse_with(text: &str, options: &DecodeOptions) -> Result<Self> {
        let mut cursor = LineCursor::new(text);
        let mut variables = IndexMap::new();

        cursor.skip_blank();
        while !cursor.is_exhausted() {
            let (variable, consumed) = decode::assemble_variable(&mut cursor, options)?;
            tracing::debug!(name = %variable.name, consumed, "assembled variable");
            if let Some(previous) = variables.insert(variable.name.clone(), variable) {
                tracing::debug!(name = %previous.name, "later block replaced variable");
            }
            cursor.skip_blank();
        }

        Ok(Self { variables })
    }

    /// Read and decode a file.
    pub fn read_file(path: &Path, options: &DecodeOptions) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DecodeError::file_open(path.to_path_buf(), e))?;
        Self::parse_with(&text, options)
    }

    /// Look up a variable by exact name.
    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.variables
            .get(name)
            .ok_or_else(|| DecodeError::not_found(name))
    }

    /// Look up a variable, returning `None` if absent.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Check if a variable is present.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Variable names in first-appearance order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Iterate over the variables.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the document holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Take ownership of the variables.
    pub fn into_variables(self) -> IndexMap<String, Variable> {
        self.variables
    }
}

impl FromStr for Document {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
