use super::{block::Block, inputs::Inputs, slot::Slot};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct ColourBlend {
    colour1: Option<Arc<Block>>,
    colour2: Option<Arc<Block>>,
    ratio: Option<Arc<Block>>,
}

impl ColourBlend {
    pub fn new(colour1: Option<Block>, colour2: Option<Block>, ratio: Option<Block>) -> Self {
        Self {
            colour1: colour1.map(Arc::new),
            colour2: colour2.map(Arc::new),
            ratio: ratio.map(Arc::new),
        }
    }

    pub fn colour1(&self) -> Option<&Block> {
        self.colour1.as_deref()
    }

    pub fn colour2(&self) -> Option<&Block> {
        self.colour2.as_deref()
    }

    pub fn ratio(&self) -> Option<&Block> {
        self.ratio.as_deref()
    }
}

impl Inputs for ColourBlend {
    fn input(&self, slot: Slot) -> Option<&Block> {
        match slot {
            Slot::Colour1 => self.colour1(),
            Slot::Colour2 => self.colour2(),
            Slot::Ratio => self.ratio(),
            Slot::Red | Slot::Green | Slot::Blue | Slot::Value => None,
        }
    }
}
