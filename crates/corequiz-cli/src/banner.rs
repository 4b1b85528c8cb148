//! Large-text rendering for the title and final scores.

/// Five-row block glyphs for the digits 0-9.
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Render `value` in large text.
///
/// Numbers use block digits; anything else is drawn inside a frame.
pub fn render(value: &str) -> Vec<String> {
    let digits: Option<Vec<usize>> = value
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect();
    match digits {
        Some(digits) if !digits.is_empty() => (0..5)
            .map(|row| {
                digits
                    .iter()
                    .map(|&d| DIGITS[d][row])
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect(),
        _ => framed(value),
    }
}

fn framed(title: &str) -> Vec<String> {
    let width = title.chars().count() + 4;
    let rule = "─".repeat(width);
    vec![
        format!("╭{rule}╮"),
        format!("│  {title}  │"),
        format!("╰{rule}╯"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit() {
        assert_eq!(render("7"), vec!["███", "  █", "  █", "  █", "  █"]);
    }

    #[test]
    fn digits_are_joined_per_row() {
        let rows = render("10");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], " █  ███");
        assert_eq!(rows[4], "███ ███");
    }

    #[test]
    fn text_is_framed() {
        let rows = render("CORE Quiz");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "│  CORE Quiz  │");
        assert_eq!(rows[0].chars().count(), rows[1].chars().count());
    }

    #[test]
    fn empty_value_is_framed() {
        assert_eq!(render("").len(), 3);
    }
}
