mod assignment;
mod block;
mod colour_blend;
mod colour_picker;
mod colour_rgb;
mod inputs;
mod module;
mod number;
mod slot;
mod statement;
mod variable;

pub use assignment::*;
pub use block::*;
pub use colour_blend::*;
pub use colour_picker::*;
pub use colour_rgb::*;
pub use inputs::*;
pub use module::*;
pub use number::*;
pub use slot::*;
pub use statement::*;
pub use variable::*;
