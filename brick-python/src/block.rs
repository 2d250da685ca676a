use crate::{colour, context::Context, fragment::Fragment, order::Order};
use brick::ir::*;

pub fn compile(block: &Block, context: &mut Context) -> Fragment {
    match block {
        Block::ColourBlend(blend) => colour::compile_blend(blend, context),
        Block::ColourPicker(picker) => colour::compile_picker(picker),
        Block::ColourRgb(rgb) => colour::compile_rgb(rgb, context),
        Block::Number(number) => compile_number(*number),
        Block::Variable(variable) => {
            Fragment::new(context.variable_name(variable.name()), Order::ATOMIC)
        }
    }
}

fn compile_number(number: Number) -> Fragment {
    let value = number.value();

    if value.is_nan() {
        Fragment::new("float('nan')", Order::FUNCTION_CALL)
    } else if value == f64::INFINITY {
        Fragment::new("float('inf')", Order::FUNCTION_CALL)
    } else if value == f64::NEG_INFINITY {
        Fragment::new("-float('inf')", Order::UNARY_SIGN)
    } else {
        Fragment::new(
            format!("{}", value),
            if value.is_sign_negative() {
                Order::UNARY_SIGN
            } else {
                Order::ATOMIC
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compile_integral_number() {
        assert_eq!(
            compile_number(Number::new(42.0)),
            Fragment::new("42", Order::ATOMIC)
        );
    }

    #[test]
    fn compile_fractional_number() {
        assert_eq!(
            compile_number(Number::new(0.25)),
            Fragment::new("0.25", Order::ATOMIC)
        );
    }

    #[test]
    fn compile_negative_number() {
        assert_eq!(
            compile_number(Number::new(-1.5)),
            Fragment::new("-1.5", Order::UNARY_SIGN)
        );
    }

    #[test]
    fn compile_special_numbers() {
        assert_eq!(
            compile_number(Number::new(f64::NAN)),
            Fragment::new("float('nan')", Order::FUNCTION_CALL)
        );
        assert_eq!(
            compile_number(Number::new(f64::INFINITY)),
            Fragment::new("float('inf')", Order::FUNCTION_CALL)
        );
        assert_eq!(
            compile_number(Number::new(f64::NEG_INFINITY)),
            Fragment::new("-float('inf')", Order::UNARY_SIGN)
        );
    }

    #[test]
    fn compile_variable() {
        let mut context = Context::new(&Default::default());

        assert_eq!(
            compile(&Variable::new("print").into(), &mut context),
            Fragment::new("print2", Order::ATOMIC)
        );
    }
}
