use indexmap::{map::Entry, IndexMap};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    name: String,
    source: String,
}

impl Definition {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Helper definitions of one program keyed by helper names.
///
/// Entries are never replaced or removed. Iteration follows registration
/// order.
#[derive(Clone, Debug, Default)]
pub struct DefinitionPool {
    definitions: IndexMap<String, Definition>,
}

impl DefinitionPool {
    pub fn has(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Definition> {
        self.definitions.get(key)
    }

    /// Registers a definition unless the key is taken already. Returns `true`
    /// if the definition is registered.
    pub fn insert(&mut self, key: impl Into<String>, definition: Definition) -> bool {
        match self.definitions.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(definition);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }
}
