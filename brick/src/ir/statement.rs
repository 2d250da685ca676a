use super::{assignment::Assignment, block::Block};

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    // A value block sitting on its own in the workspace.
    Expression(Block),
}

impl From<Assignment> for Statement {
    fn from(assignment: Assignment) -> Self {
        Self::Assignment(assignment)
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Self::Expression(block)
    }
}
