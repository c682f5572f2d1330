use crate::parser::base::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_TEXT_WIDTH: usize = 17;

/// Renders a `left` column followed by a `text` column, wrapping the text column when its width is known.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: usize,
    left: usize,
    text: Option<usize>,
}

impl ColumnRenderer {
    /// Produce a renderer whose text column fills what remains of the total width.
    pub(crate) fn guided(
        indent: usize,
        padding: usize,
        left: usize,
        total_width: Option<usize>,
    ) -> Self {
        let text = total_width.map(|total| {
            let target_total = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
            let non_text = indent + left + padding;

            if non_text + MINIMUM_TEXT_WIDTH <= target_total {
                target_total - non_text
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Columns {non_text} do not fit within the target total {target_total}.  Selecting text: {MINIMUM_TEXT_WIDTH}.");
                }

                MINIMUM_TEXT_WIDTH
            }
        });

        Self::new(padding, left, text)
    }

    pub(crate) fn new(padding: usize, left: usize, text: Option<usize>) -> Self {
        Self {
            padding,
            left,
            text,
        }
    }

    pub(crate) fn render(&self, prefix: &str, left: &str, text: &str) -> Vec<String> {
        let padding = self.padding;
        let left_width = self.left;
        let parts = match self.text {
            Some(width) => chunk(text, width),
            None => vec![text.to_string()],
        };
        let mut out = Vec::default();

        for (i, part) in parts.iter().enumerate() {
            if i == 0 {
                out.push(format!("{prefix}{left:left_width$}{:padding$}{part}", ""));
            } else {
                let indent = " ".repeat(prefix.len());
                out.push(format!("{indent}{:left_width$}{:padding$}{part}", "", ""));
            }
        }

        if out.is_empty() {
            out.push(format!("{prefix}{left}"));
        }

        out.into_iter()
            .map(|line| line.trim_end().to_string())
            .collect()
    }
}

/// Split `paragraph` into lines of at most `width` characters, hyphenating words that are too long by themselves.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    // Leave room for the hyphen; a width below 2 cannot hyphenate at all.
    let increment = std::cmp::max(width, 2) - 1;
    let mut left = 0;

    while left + increment + 1 < characters.len() {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_hint(&self, hint: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Error: {error}");
    }

    fn print_error_hint(&self, hint: String) {
        eprintln!("{hint}");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 10, vec![])]
    #[case("abc", 10, vec!["abc"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("  abc   def ", 7, vec!["abc def"])]
    #[case("abcdefgh", 4, vec!["abc-", "def-", "gh"])]
    #[case("abcd", 4, vec!["abcd"])]
    #[case("ab abcdefgh", 4, vec!["ab", "abc-", "def-", "gh"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[test]
    fn render_unbounded() {
        // Setup
        let renderer = ColumnRenderer::new(2, 6, None);

        // Execute
        let lines = renderer.render("  * ", "abc", "a long line of text");

        // Verify
        assert_eq!(lines, vec!["  * abc     a long line of text"]);
    }

    #[test]
    fn render_wrapped() {
        // Setup
        let renderer = ColumnRenderer::new(2, 6, Some(10));

        // Execute
        let lines = renderer.render("    ", "abc", "a long line of text");

        // Verify
        assert_eq!(
            lines,
            vec![
                "    abc     a long",
                "            line of",
                "            text",
            ]
        );
    }

    #[test]
    fn render_empty_text() {
        let renderer = ColumnRenderer::new(2, 6, Some(10));
        assert_eq!(renderer.render("    ", "abc", ""), vec!["    abc"]);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(100), Some(95 - 10))]
    #[case(Some(20), Some(MINIMUM_TEXT_WIDTH))]
    fn guided(#[case] total: Option<usize>, #[case] expected: Option<usize>) {
        let renderer = ColumnRenderer::guided(4, 2, 4, total);
        assert_eq!(renderer.text, expected);
    }
}
