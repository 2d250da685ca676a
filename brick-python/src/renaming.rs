/// Turns an arbitrary name into a legal Python identifier.
pub fn rename(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".into();
    }

    let name = name
        .chars()
        .map(|char| {
            if char.is_ascii_alphanumeric() {
                char
            } else {
                '_'
            }
        })
        .collect::<String>();

    if name.starts_with(|char: char| char.is_ascii_digit()) {
        "my_".to_owned() + &name
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_legal_names() {
        assert_eq!(rename("colour_rgb"), "colour_rgb");
        assert_eq!(rename("_x1"), "_x1");
    }

    #[test]
    fn replace_illegal_characters() {
        assert_eq!(rename("my colour-1"), "my_colour_1");
        assert_eq!(rename("café"), "caf_");
    }

    #[test]
    fn prefix_leading_digit() {
        assert_eq!(rename("1st"), "my_1st");
    }

    #[test]
    fn rename_empty_name() {
        assert_eq!(rename(""), "unnamed");
    }
}
