//! Line-oriented reader for detail bodies.
//!
//! Only the handful of constructs the portfolio text uses are recognised.
//! Every input line produces exactly one [`Block`]; there is no nesting and
//! no error case. Unrecognised syntax falls through as a paragraph.

/// One rendered line of a detail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#` .. `######`
    Heading { level: u8, text: &'a str },
    /// `- item` / `* item`, `indent` counts two-space steps.
    Bullet { indent: u8, text: &'a str },
    /// `> text`
    Quote(&'a str),
    /// `![alt](url)` on its own line.
    Image { alt: &'a str, url: &'a str },
    /// `[text](url)` on its own line.
    Link { text: &'a str, url: &'a str },
    Paragraph(&'a str),
    Blank,
}

impl Block<'_> {
    /// URL a click on this block should open, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Block::Image { url, .. } | Block::Link { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Splits `body` into blocks, one per line.
pub fn parse(body: &str) -> Vec<Block<'_>> {
    body.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Block<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }

    if let Some(block) = heading(trimmed) {
        return block;
    }

    if let Some(rest) = trimmed.strip_prefix('>') {
        return Block::Quote(rest.trim_start());
    }

    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        let leading = line.len() - line.trim_start().len();
        let indent = u8::try_from(leading / 2).unwrap_or(u8::MAX);
        return Block::Bullet { indent, text: rest.trim() };
    }

    if let Some(rest) = trimmed.strip_prefix('!') {
        if let Some((alt, url)) = bracketed_link(rest) {
            return Block::Image { alt, url };
        }
    }

    if let Some((text, url)) = bracketed_link(trimmed) {
        return Block::Link { text, url };
    }

    Block::Paragraph(trimmed)
}

fn heading(line: &str) -> Option<Block<'_>> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    // `#tag` is not a heading
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some(Block::Heading { level: hashes as u8, text: rest.trim() })
}

/// Matches a whole line of the form `[text](url)`.
fn bracketed_link(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_prefix('[')?;
    let (text, rest) = inner.split_once("](")?;
    let url = rest.strip_suffix(')')?;
    if url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }
    Some((text, url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_by_level() {
        assert_eq!(parse_line("# Title"), Block::Heading { level: 1, text: "Title" });
        assert_eq!(parse_line("### Tech stack "), Block::Heading { level: 3, text: "Tech stack" });
        assert_eq!(parse_line("#hashtag"), Block::Paragraph("#hashtag"));
        assert_eq!(parse_line("####### deep"), Block::Paragraph("####### deep"));
    }

    #[test]
    fn bullets_carry_indent() {
        assert_eq!(parse_line("- top"), Block::Bullet { indent: 0, text: "top" });
        assert_eq!(parse_line("  - nested"), Block::Bullet { indent: 1, text: "nested" });
        assert_eq!(parse_line("    * deeper"), Block::Bullet { indent: 2, text: "deeper" });
    }

    #[test]
    fn images_and_links() {
        let img = parse_line("![logo](https://example.com/logo.png)");
        assert_eq!(img, Block::Image { alt: "logo", url: "https://example.com/logo.png" });
        assert_eq!(img.target(), Some("https://example.com/logo.png"));

        let link = parse_line("[GitHub](https://github.com/x)");
        assert_eq!(link, Block::Link { text: "GitHub", url: "https://github.com/x" });
    }

    #[test]
    fn inline_link_stays_paragraph() {
        let line = "see [docs](https://example.com) for more";
        assert_eq!(parse_line(line), Block::Paragraph(line));
        assert_eq!(parse_line("[broken](has space)"), Block::Paragraph("[broken](has space)"));
    }

    #[test]
    fn one_block_per_line() {
        let body = "## Intro\n> quoted\n\nplain text\n";
        assert_eq!(
            parse(body),
            vec![
                Block::Heading { level: 2, text: "Intro" },
                Block::Quote("quoted"),
                Block::Blank,
                Block::Paragraph("plain text"),
            ]
        );
    }

    #[test]
    fn builtin_bodies_parse() {
        let tree = crate::content::ContentTree::builtin();
        for cat in tree.categories() {
            let detail = cat.items[0].detail.expect("description detail");
            let blocks = parse(detail.body);
            assert_eq!(blocks.len(), detail.body.lines().count());
        }
    }
}
