#[cfg(test)]
use once_cell::sync::Lazy;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub indent: String,
    // Names that generated helpers must never take, e.g. globals provided by
    // the host program.
    pub reserved_names: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            reserved_names: vec![],
        }
    }
}

#[cfg(test)]
pub static DUMMY_CONFIGURATION: Lazy<Configuration> = Lazy::new(|| Configuration {
    indent: "    ".into(),
    reserved_names: vec!["colour_blend".into()],
});
