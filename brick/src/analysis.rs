mod evaluation;
mod validation;
mod variable_names;

pub use evaluation::*;
pub use validation::*;
pub use variable_names::*;
