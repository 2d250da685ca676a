use super::{
    colour_blend::ColourBlend, colour_picker::ColourPicker, colour_rgb::ColourRgb, number::Number,
    variable::Variable,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    ColourBlend(ColourBlend),
    ColourPicker(ColourPicker),
    ColourRgb(ColourRgb),
    Number(Number),
    Variable(Variable),
}

impl From<ColourBlend> for Block {
    fn from(blend: ColourBlend) -> Self {
        Self::ColourBlend(blend)
    }
}

impl From<ColourPicker> for Block {
    fn from(picker: ColourPicker) -> Self {
        Self::ColourPicker(picker)
    }
}

impl From<ColourRgb> for Block {
    fn from(rgb: ColourRgb) -> Self {
        Self::ColourRgb(rgb)
    }
}

impl From<Number> for Block {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<Variable> for Block {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}
