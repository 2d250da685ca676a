use crate::{colour::Colour, ir::*};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Colour(Colour),
    Number(f64),
}

impl From<Colour> for Value {
    fn from(colour: Colour) -> Self {
        Self::Colour(colour)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// Evaluates a block tree whose leaves are all literals.
///
/// Empty slots take the same defaults as in generated code. Variables and
/// values of unexpected kinds make the whole tree non-constant.
pub fn evaluate(block: &Block) -> Option<Value> {
    Some(match block {
        Block::ColourBlend(blend) => evaluate_colour(blend.colour1())?
            .blend(
                &evaluate_colour(blend.colour2())?,
                evaluate_number(blend.ratio())?,
            )
            .into(),
        Block::ColourPicker(picker) => Colour::parse(picker.colour()?)?.into(),
        Block::ColourRgb(rgb) => Colour::from_unit_channels(
            evaluate_number(rgb.red())?,
            evaluate_number(rgb.green())?,
            evaluate_number(rgb.blue())?,
        )
        .into(),
        Block::Number(number) => number.value().into(),
        Block::Variable(_) => return None,
    })
}

fn evaluate_colour(input: Option<&Block>) -> Option<Colour> {
    match input.map(evaluate) {
        None => Some(Colour::BLACK),
        Some(Some(Value::Colour(colour))) => Some(colour),
        Some(_) => None,
    }
}

fn evaluate_number(input: Option<&Block>) -> Option<f64> {
    match input.map(evaluate) {
        None => Some(0.0),
        Some(Some(Value::Number(number))) => Some(number),
        Some(_) => None,
    }
}
