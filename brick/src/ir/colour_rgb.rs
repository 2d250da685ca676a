use super::{block::Block, inputs::Inputs, slot::Slot};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct ColourRgb {
    red: Option<Arc<Block>>,
    green: Option<Arc<Block>>,
    blue: Option<Arc<Block>>,
}

impl ColourRgb {
    pub fn new(red: Option<Block>, green: Option<Block>, blue: Option<Block>) -> Self {
        Self {
            red: red.map(Arc::new),
            green: green.map(Arc::new),
            blue: blue.map(Arc::new),
        }
    }

    pub fn red(&self) -> Option<&Block> {
        self.red.as_deref()
    }

    pub fn green(&self) -> Option<&Block> {
        self.green.as_deref()
    }

    pub fn blue(&self) -> Option<&Block> {
        self.blue.as_deref()
    }
}

impl Inputs for ColourRgb {
    fn input(&self, slot: Slot) -> Option<&Block> {
        match slot {
            Slot::Red => self.red(),
            Slot::Green => self.green(),
            Slot::Blue => self.blue(),
            Slot::Colour1 | Slot::Colour2 | Slot::Ratio | Slot::Value => None,
        }
    }
}
