use crate::{
    context::Context,
    fragment::Fragment,
    helper::{COLOUR_BLEND, COLOUR_RGB},
    order::Order,
    quote::quote,
};
use brick::ir::{ColourBlend, ColourPicker, ColourRgb, Slot};

const DEFAULT_CHANNEL: &str = "0";
const DEFAULT_COLOUR: &str = "'#000000'";
const DEFAULT_RATIO: &str = "0";

pub fn compile_picker(picker: &ColourPicker) -> Fragment {
    Fragment::new(quote(picker.colour().unwrap_or_default()), Order::ATOMIC)
}

pub fn compile_rgb(rgb: &ColourRgb, context: &mut Context) -> Fragment {
    let name = context.define_helper(&COLOUR_RGB);
    let red = context.resolve_or(rgb, Slot::Red, Order::NONE, DEFAULT_CHANNEL);
    let green = context.resolve_or(rgb, Slot::Green, Order::NONE, DEFAULT_CHANNEL);
    let blue = context.resolve_or(rgb, Slot::Blue, Order::NONE, DEFAULT_CHANNEL);

    Fragment::new(
        format!("{}({}, {}, {})", name, red, green, blue),
        Order::FUNCTION_CALL,
    )
}

pub fn compile_blend(blend: &ColourBlend, context: &mut Context) -> Fragment {
    let name = context.define_helper(&COLOUR_BLEND);
    let colour1 = context.resolve_or(blend, Slot::Colour1, Order::NONE, DEFAULT_COLOUR);
    let colour2 = context.resolve_or(blend, Slot::Colour2, Order::NONE, DEFAULT_COLOUR);
    let ratio = context.resolve_or(blend, Slot::Ratio, Order::NONE, DEFAULT_RATIO);

    Fragment::new(
        format!("{}({}, {}, {})", name, colour1, colour2, ratio),
        Order::FUNCTION_CALL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{configuration::DUMMY_CONFIGURATION, definition_pool::Definition};
    use brick::ir::*;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Option<Block> {
        Some(Number::new(value).into())
    }

    mod picker {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn compile_literal() {
            assert_eq!(
                compile_picker(&ColourPicker::new("#4286f4")),
                Fragment::new("'#4286f4'", Order::ATOMIC)
            );
        }

        #[test]
        fn compile_literal_with_control_characters() {
            assert_eq!(
                compile_picker(&ColourPicker::new("a\rb\0")),
                Fragment::new(r"'a\rb\x00'", Order::ATOMIC)
            );
        }

        #[test]
        fn compile_empty_literal() {
            assert_eq!(
                compile_picker(&ColourPicker::empty()),
                Fragment::new("''", Order::ATOMIC)
            );
        }

        #[test]
        fn leave_definitions_untouched() {
            let mut context = Context::new(&Default::default());

            let fragment =
                crate::block::compile(&ColourPicker::new("#4286f4").into(), &mut context);

            assert_eq!(fragment.code(), "'#4286f4'");
            assert!(context.definitions().is_empty());
        }
    }

    mod rgb {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn compile_channels() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_rgb(
                    &ColourRgb::new(number(1.0), number(0.0), number(0.5)),
                    &mut context
                ),
                Fragment::new("colour_rgb(1, 0, 0.5)", Order::FUNCTION_CALL)
            );
            assert_eq!(
                context.definitions().get("colour_rgb"),
                Some(&Definition::new(
                    "colour_rgb",
                    COLOUR_RGB.render("colour_rgb", "  ")
                ))
            );
        }

        #[test]
        fn compile_out_of_range_channels_as_is() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_rgb(
                    &ColourRgb::new(number(2.0), number(0.0), number(-1.0)),
                    &mut context
                )
                .code(),
                "colour_rgb(2, 0, -1)"
            );
        }

        #[test]
        fn compile_empty_slots() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_rgb(&ColourRgb::new(None, None, None), &mut context),
                Fragment::new("colour_rgb(0, 0, 0)", Order::FUNCTION_CALL)
            );
        }

        #[test]
        fn define_helper_once() {
            let mut context = Context::new(&Default::default());
            let rgb = ColourRgb::new(None, number(1.0), None);

            let one = compile_rgb(&rgb, &mut context);
            let other = compile_rgb(&rgb, &mut context);

            assert_eq!(one, other);
            assert_eq!(context.definitions().len(), 1);
        }

        #[test]
        fn compile_variable_channels() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_rgb(
                    &ColourRgb::new(Some(Variable::new("red level").into()), None, None),
                    &mut context
                )
                .code(),
                "colour_rgb(red_level, 0, 0)"
            );
        }
    }

    mod blend {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn compile_inputs() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_blend(
                    &ColourBlend::new(
                        Some(ColourPicker::new("#ff0000").into()),
                        Some(ColourPicker::new("#0000ff").into()),
                        number(0.25),
                    ),
                    &mut context
                ),
                Fragment::new(
                    "colour_blend('#ff0000', '#0000ff', 0.25)",
                    Order::FUNCTION_CALL
                )
            );
            assert_eq!(context.definitions().len(), 1);
        }

        #[test]
        fn compile_empty_slots() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_blend(&ColourBlend::new(None, None, None), &mut context),
                Fragment::new(
                    "colour_blend('#000000', '#000000', 0)",
                    Order::FUNCTION_CALL
                )
            );
        }

        #[test]
        fn compile_nested_rgb() {
            let mut context = Context::new(&Default::default());

            assert_eq!(
                compile_blend(
                    &ColourBlend::new(
                        Some(ColourRgb::new(number(1.0), None, None).into()),
                        Some(ColourRgb::new(None, None, number(1.0)).into()),
                        number(0.5),
                    ),
                    &mut context
                )
                .code(),
                "colour_blend(colour_rgb(1, 0, 0), colour_rgb(0, 0, 1), 0.5)"
            );
            assert_eq!(
                context
                    .definitions()
                    .iter()
                    .map(Definition::name)
                    .collect::<Vec<_>>(),
                vec!["colour_blend", "colour_rgb"]
            );
        }

        #[test]
        fn compile_with_reserved_helper_name() {
            let mut context = Context::new(&DUMMY_CONFIGURATION);

            assert_eq!(
                compile_blend(&ColourBlend::new(None, None, None), &mut context).code(),
                "colour_blend2('#000000', '#000000', 0)"
            );
            assert_eq!(
                context
                    .definitions()
                    .get("colour_blend")
                    .map(|definition| definition.source().lines().next()),
                Some(Some("def colour_blend2(colour1, colour2, ratio):"))
            );
        }
    }
}
