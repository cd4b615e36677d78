/// Distributes a free-text job description across the three bullet slots the
/// contract has room for.
///
/// Lines are trimmed and blank ones dropped. Anything past the second line is
/// folded into the third slot. Missing or blank input yields three empty slots.
pub fn split_job_description(text: Option<&str>) -> [String; 3] {
    let lines: Vec<&str> = text
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [] => Default::default(),
        [first] => [first.to_string(), String::new(), String::new()],
        [first, second] => [first.to_string(), second.to_string(), String::new()],
        [first, second, rest @ ..] => [first.to_string(), second.to_string(), rest.join(" ")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_fills_the_first_slot() {
        assert_eq!(
            split_job_description(Some("Loading materials")),
            ["Loading materials".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn drops_blank_lines_and_trims() {
        assert_eq!(
            split_job_description(Some("  a  \n\n   \n b\r\n")),
            ["a".to_string(), "b".to_string(), String::new()]
        );
    }

    #[test]
    fn overflow_is_joined_into_the_third_slot() {
        assert_eq!(
            split_job_description(Some("a\nb\nc\nd\ne")),
            ["a".to_string(), "b".to_string(), "c d e".to_string()]
        );
    }

    #[test]
    fn missing_input_gives_empty_slots() {
        assert_eq!(split_job_description(None), <[String; 3]>::default());
        assert_eq!(split_job_description(Some("\n \n")), <[String; 3]>::default());
    }
}
