use super::{block::Block, slot::Slot};

/// Nodes with named slots.
///
/// Slots a node does not have read as empty.
pub trait Inputs {
    fn input(&self, slot: Slot) -> Option<&Block>;
}
