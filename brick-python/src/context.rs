use crate::{
    block,
    configuration::Configuration,
    definition_pool::{Definition, DefinitionPool},
    helper::Helper,
    name_allocator::NameAllocator,
    order::Order,
};
use brick::ir::{Inputs, Slot};

/// State of one compilation pass.
///
/// Contexts share nothing with each other, so independent passes may run in
/// parallel as long as each uses its own context.
#[derive(Debug)]
pub struct Context {
    indent: String,
    names: NameAllocator,
    definitions: DefinitionPool,
}

impl Context {
    pub fn new(configuration: &Configuration) -> Self {
        Self {
            indent: configuration.indent.clone(),
            names: NameAllocator::new(configuration.reserved_names.iter().map(String::as_str)),
            definitions: DefinitionPool::default(),
        }
    }

    pub fn definitions(&self) -> &DefinitionPool {
        &self.definitions
    }

    pub fn into_definitions(self) -> DefinitionPool {
        self.definitions
    }

    pub fn allocate_name(&mut self, base: &str) -> String {
        self.names.allocate(base)
    }

    pub fn variable_name(&mut self, name: &str) -> String {
        self.names.variable(name)
    }

    /// Compiles a block in a slot into code to be placed in a context of
    /// `order`. Returns `None` if the slot is empty.
    pub fn resolve(&mut self, node: &impl Inputs, slot: Slot, order: Order) -> Option<String> {
        let block = node.input(slot)?;

        Some(block::compile(block, self).into_code(order))
    }

    pub fn resolve_or(
        &mut self,
        node: &impl Inputs,
        slot: Slot,
        order: Order,
        default: &str,
    ) -> String {
        self.resolve(node, slot, order).unwrap_or_else(|| {
            log::warn!("slot {} not connected; defaulting to {}", slot, default);

            default.into()
        })
    }

    /// Registers a helper on its first use in this pass and returns the name
    /// it was registered with.
    pub fn define_helper(&mut self, helper: &Helper) -> String {
        if let Some(definition) = self.definitions.get(helper.name()) {
            return definition.name().into();
        }

        let name = self.names.allocate(helper.name());

        log::debug!("defining helper {} as {}", helper.name(), name);
        self.definitions.insert(
            helper.name(),
            Definition::new(&name, helper.render(&name, &self.indent)),
        );

        name
    }
}
