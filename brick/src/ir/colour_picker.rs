use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColourPicker {
    colour: Option<Arc<str>>,
}

impl ColourPicker {
    pub fn new(colour: impl Into<String>) -> Self {
        Self {
            colour: Some(colour.into().into()),
        }
    }

    // A picker whose field was never set by the editor.
    pub fn empty() -> Self {
        Self { colour: None }
    }

    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }
}
