use crate::order::Order;

/// Python source of an expression together with its binding strength.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    code: String,
    order: Order,
}

impl Fragment {
    pub fn new(code: impl Into<String>, order: Order) -> Self {
        Self {
            code: code.into(),
            order,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns code that can be spliced into a context of `outer` order.
    pub fn into_code(self, outer: Order) -> String {
        self.order.parenthesize(self.code, outer)
    }
}
