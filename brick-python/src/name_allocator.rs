use crate::{renaming::rename, reserved_words::RESERVED_WORDS};
use fnv::{FnvHashMap, FnvHashSet};

/// Hands out identifiers that are unique within one generated program.
#[derive(Clone, Debug, Default)]
pub struct NameAllocator {
    reserved_names: FnvHashSet<String>,
    names: FnvHashSet<String>,
    variables: FnvHashMap<String, String>,
}

impl NameAllocator {
    pub fn new<'a>(reserved_names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            reserved_names: RESERVED_WORDS
                .iter()
                .map(|name| name.to_string())
                .chain(reserved_names.into_iter().map(String::from))
                .collect(),
            ..Default::default()
        }
    }

    /// Allocates a fresh identifier derived from `base`, appending `2`, `3`,
    /// ... on collisions.
    pub fn allocate(&mut self, base: &str) -> String {
        let base = rename(base);
        let mut name = base.clone();
        let mut index = 2;

        while self.is_taken(&name) {
            name = format!("{}{}", base, index);
            index += 1;
        }

        log::debug!("allocated name {}", name);
        self.names.insert(name.clone());

        name
    }

    /// Returns the identifier of a user variable, allocating it on first use.
    pub fn variable(&mut self, name: &str) -> String {
        if let Some(allocated) = self.variables.get(name) {
            return allocated.clone();
        }

        let allocated = self.allocate(name);

        self.variables.insert(name.into(), allocated.clone());

        allocated
    }

    fn is_taken(&self, name: &str) -> bool {
        self.names.contains(name) || self.reserved_names.contains(name)
    }
}
