//! Preprocessor definition sets.
//!
//! A [`DefinitionSet`] is an ordered list of `#define` directives. Order is
//! preserved exactly as definitions are added so that the same inputs always
//! render to byte-identical header text.

use std::fmt::Write as _;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::escape::quote_value;

/// Suffix for macros holding a lowercased copy of another macro's value.
pub const LOWER_SUFFIX: &str = "_LOWER";

/// A single `#define` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Macro name, a C identifier.
    pub name: String,

    /// Unquoted value. `None` renders a bare flag (`#define NAME`).
    pub value: Option<String>,
}

impl Definition {
    /// Renders the directive without a trailing newline.
    pub fn render(&self) -> Result<String> {
        match &self.value {
            Some(value) => Ok(format!("#define {} {}", self.name, quote_value(value)?)),
            None => Ok(format!("#define {}", self.name)),
        }
    }
}

/// An insertion-ordered set of macro definitions with unique names.
#[derive(Debug, Default, Clone)]
pub struct DefinitionSet {
    defs: Vec<Definition>,
    names: FxHashSet<String>,
}

impl DefinitionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `#define NAME "value"`.
    pub fn define(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.push(name, Some(value.to_owned()))
    }

    /// Adds `#define NAME_LOWER "value"` with the value lowercased.
    pub fn define_lower(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.push(&format!("{name}{LOWER_SUFFIX}"), Some(value.to_lowercase()))
    }

    /// Adds a valueless `#define NAME`.
    pub fn flag(&mut self, name: &str) -> Result<&mut Self> {
        self.push(name, None)
    }

    fn push(&mut self, name: &str, value: Option<String>) -> Result<&mut Self> {
        if !is_identifier(name) {
            return Err(Error::InvalidMacroName(name.to_owned()));
        }
        if !self.names.insert(name.to_owned()) {
            return Err(Error::DuplicateMacro(name.to_owned()));
        }
        self.defs.push(Definition {
            name: name.to_owned(),
            value,
        });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.defs.iter()
    }

    /// Looks up a definition by macro name.
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.defs.iter().find(|d| d.name == name)
    }

    /// Renders every definition on its own line, each terminated by `\n`.
    pub fn render(&self) -> Result<String> {
        let mut out = String::with_capacity(self.defs.len() * 48);
        for def in &self.defs {
            let _ = writeln!(out, "{}", def.render()?);
        }
        Ok(out)
    }
}

/// Returns true for `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
