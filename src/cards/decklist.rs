use super::Card;

/// Plain-text deck export: one entry per line, optionally `N Name` or
/// `Nx Name`. Quantities expand into repeated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decklist(Vec<String>);

impl Decklist {
    /// Copies allowed from a single line.
    pub const MAX_COPIES: usize = 100;

    pub fn parse(text: &str) -> Self {
        Self(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(Self::entry)
                .flat_map(|(n, name)| std::iter::repeat_n(name.to_string(), n))
                .collect(),
        )
    }
    pub fn names(&self) -> &[String] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// One fresh card per copy, in list order.
    pub fn cards(&self) -> Vec<Card> {
        self.0.iter().map(|name| Card::from(name.as_str())).collect()
    }

    /// quantity prefix, an optional `x`, then whitespace before the name
    fn entry(line: &str) -> (usize, &str) {
        let digits = line
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(line.len());
        let rest = &line[digits..];
        let name = rest
            .trim_start()
            .strip_prefix(['x', 'X'])
            .filter(|tail| tail.starts_with(char::is_whitespace))
            .or_else(|| Some(rest).filter(|tail| tail.starts_with(char::is_whitespace)))
            .map(str::trim)
            .filter(|name| !name.is_empty());
        match (digits, name) {
            (0, _) | (_, None) => (1, line),
            (_, Some(name)) => (
                match line[..digits].parse::<usize>() {
                    Ok(n) => n.clamp(1, Self::MAX_COPIES),
                    Err(_) => Self::MAX_COPIES,
                },
                name,
            ),
        }
    }
}
