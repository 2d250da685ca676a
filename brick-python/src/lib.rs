mod block;
mod colour;
mod configuration;
mod context;
mod definition_pool;
mod error;
mod fragment;
mod helper;
mod name_allocator;
mod order;
mod quote;
mod renaming;
mod reserved_words;
mod statement;

use brick::{
    analysis::{collect_variable_names, validate},
    ir::*,
};

pub use block::compile as compile_block;
pub use colour::{compile_blend, compile_picker, compile_rgb};
pub use configuration::*;
pub use context::*;
pub use definition_pool::*;
pub use error::*;
pub use fragment::*;
pub use helper::*;
pub use name_allocator::*;
pub use order::*;

/// Compiles a module into a Python program.
///
/// Helper definitions come first in the order they are first used, followed
/// by one line per statement.
pub fn compile(module: &Module, configuration: &Configuration) -> Result<String, CompileError> {
    validate(module)?;

    let mut context = Context::new(configuration);

    // Variables take their names before any helper does.
    for name in collect_variable_names(module) {
        context.variable_name(&name);
    }

    let lines = module
        .statements()
        .iter()
        .map(|statement| statement::compile(statement, &mut context))
        .collect::<Vec<_>>();

    Ok(finish(&context.into_definitions(), &lines))
}

fn finish(definitions: &DefinitionPool, lines: &[String]) -> String {
    let code = lines
        .iter()
        .map(|line| line.clone() + "\n")
        .collect::<String>();

    if definitions.is_empty() {
        code
    } else {
        definitions
            .iter()
            .map(Definition::source)
            .collect::<Vec<_>>()
            .join("\n\n")
            + "\n\n\n"
            + &code
    }
}
