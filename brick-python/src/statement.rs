use crate::{block, context::Context, order::Order};
use brick::ir::*;

const DEFAULT_VALUE: &str = "0";

pub fn compile(statement: &Statement, context: &mut Context) -> String {
    match statement {
        Statement::Assignment(assignment) => {
            let name = context.variable_name(assignment.variable().name());

            format!(
                "{} = {}",
                name,
                context.resolve_or(assignment, Slot::Value, Order::NONE, DEFAULT_VALUE)
            )
        }
        Statement::Expression(block) => block::compile(block, context).into_code(Order::NONE),
    }
}
