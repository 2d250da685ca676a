use super::{block::Block, inputs::Inputs, slot::Slot, variable::Variable};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    variable: Variable,
    value: Option<Arc<Block>>,
}

impl Assignment {
    pub fn new(variable: impl Into<String>, value: Option<Block>) -> Self {
        Self {
            variable: Variable::new(variable),
            value: value.map(Arc::new),
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn value(&self) -> Option<&Block> {
        self.value.as_deref()
    }
}

impl Inputs for Assignment {
    fn input(&self, slot: Slot) -> Option<&Block> {
        match slot {
            Slot::Value => self.value(),
            Slot::Red | Slot::Green | Slot::Blue | Slot::Colour1 | Slot::Colour2 | Slot::Ratio => {
                None
            }
        }
    }
}
