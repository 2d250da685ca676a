use crate::{colour::Colour, ir::*};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

pub fn validate(module: &Module) -> Result<(), ValidationError> {
    for statement in module.statements() {
        match statement {
            Statement::Assignment(assignment) => {
                check_variable(assignment.variable())?;
                check_inputs([assignment.value()])?;
            }
            Statement::Expression(block) => check_block(block)?,
        }
    }

    Ok(())
}

fn check_block(block: &Block) -> Result<(), ValidationError> {
    match block {
        Block::ColourBlend(blend) => {
            check_inputs([blend.colour1(), blend.colour2(), blend.ratio()])
        }
        Block::ColourPicker(picker) => match picker.colour() {
            Some(colour) if Colour::parse(colour).is_none() => {
                Err(ValidationError::InvalidColour(colour.into()))
            }
            _ => Ok(()),
        },
        Block::ColourRgb(rgb) => check_inputs([rgb.red(), rgb.green(), rgb.blue()]),
        Block::Number(_) => Ok(()),
        Block::Variable(variable) => check_variable(variable),
    }
}

fn check_inputs<'a>(
    inputs: impl IntoIterator<Item = Option<&'a Block>>,
) -> Result<(), ValidationError> {
    for block in inputs.into_iter().flatten() {
        check_block(block)?;
    }

    Ok(())
}

fn check_variable(variable: &Variable) -> Result<(), ValidationError> {
    if variable.name().is_empty() {
        return Err(ValidationError::EmptyVariableName);
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyVariableName,
    InvalidColour(String),
}

impl Display for ValidationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

impl Error for ValidationError {}
