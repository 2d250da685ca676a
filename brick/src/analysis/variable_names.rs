use crate::ir::*;
use fnv::FnvHashSet;

/// Collects the distinct variable names of a module in order of appearance.
pub fn collect_variable_names(module: &Module) -> Vec<String> {
    let mut names = vec![];
    let mut seen = FnvHashSet::default();

    for statement in module.statements() {
        match statement {
            Statement::Assignment(assignment) => {
                collect_name(assignment.variable(), &mut names, &mut seen);

                if let Some(value) = assignment.value() {
                    collect_from_block(value, &mut names, &mut seen);
                }
            }
            Statement::Expression(block) => collect_from_block(block, &mut names, &mut seen),
        }
    }

    names
}

fn collect_from_block<'a>(
    block: &'a Block,
    names: &mut Vec<String>,
    seen: &mut FnvHashSet<&'a str>,
) {
    let inputs = match block {
        Block::ColourBlend(blend) => [blend.colour1(), blend.colour2(), blend.ratio()],
        Block::ColourRgb(rgb) => [rgb.red(), rgb.green(), rgb.blue()],
        Block::Variable(variable) => {
            collect_name(variable, names, seen);
            return;
        }
        Block::ColourPicker(_) | Block::Number(_) => return,
    };

    for block in inputs.into_iter().flatten() {
        collect_from_block(block, names, seen);
    }
}

fn collect_name<'a>(
    variable: &'a Variable,
    names: &mut Vec<String>,
    seen: &mut FnvHashSet<&'a str>,
) {
    if seen.insert(variable.name()) {
        names.push(variable.name().into());
    }
}
