use indoc::indoc;

/// Template of a shared Python function emitted at most once per program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Helper {
    name: &'static str,
    parameters: &'static [&'static str],
    body: &'static str,
}

impl Helper {
    pub const fn new(
        name: &'static str,
        parameters: &'static [&'static str],
        body: &'static str,
    ) -> Self {
        Self {
            name,
            parameters,
            body,
        }
    }

    /// Returns a name used both as a key in a definition pool and as a base of
    /// an identifier of the function.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn render(&self, name: &str, indent: &str) -> String {
        format!(
            "def {}({}):\n{}",
            name,
            self.parameters.join(", "),
            self.body
                .lines()
                .map(|line| indent.to_owned() + line)
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

pub const COLOUR_RGB: Helper = Helper::new(
    "colour_rgb",
    &["r", "g", "b"],
    indoc! {"
        r = round(min(1, max(0, r)) * 255)
        g = round(min(1, max(0, g)) * 255)
        b = round(min(1, max(0, b)) * 255)
        return '#%02x%02x%02x' % (r, g, b)
    "},
);

pub const COLOUR_BLEND: Helper = Helper::new(
    "colour_blend",
    &["colour1", "colour2", "ratio"],
    indoc! {"
        r1, r2 = int(colour1[1:3], 16), int(colour2[1:3], 16)
        g1, g2 = int(colour1[3:5], 16), int(colour2[3:5], 16)
        b1, b2 = int(colour1[5:7], 16), int(colour2[5:7], 16)
        ratio = min(1, max(0, ratio))
        r = round(r1 * (1 - ratio) + r2 * ratio)
        g = round(g1 * (1 - ratio) + g2 * ratio)
        b = round(b1 * (1 - ratio) + b2 * ratio)
        return '#%02x%02x%02x' % (r, g, b)
    "},
);
