use std::collections::HashMap;

use log::trace;

/// The only type a variable can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    Int,
}

/// Names seen in `declare` statements.
///
/// Entries are never removed. Declaring a name twice keeps the first entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationTable {
    entries: HashMap<String, DeclaredType>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        DeclarationTable {
            entries: HashMap::new(),
        }
    }

    /// Records `name` as an integer variable. Returns false if it was already there.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            trace!("`{}` already declared", name);
            return false;
        }

        self.entries.insert(name.to_string(), DeclaredType::Int);
        trace!("declared `{}`", name);
        true
    }

    pub fn get(&self, name: &str) -> Option<DeclaredType> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
