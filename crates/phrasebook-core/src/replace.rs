/// Ordered multi-pattern substitution over finalized section bodies.
///
/// Replacement runs in one left-to-right pass: matches never overlap,
/// replacement output is not rescanned, and when several patterns match
/// at the same position the one listed first wins. Empty patterns are
/// dropped at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacer {
    pairs: Vec<(String, String)>,
}

impl Replacer {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        let pairs = pairs
            .into_iter()
            .filter(|(pattern, _)| !pattern.is_empty())
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn replace(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;
        'scan: while !rest.is_empty() {
            for (pattern, replacement) in &self.pairs {
                if let Some(stripped) = rest.strip_prefix(pattern.as_str()) {
                    output.push_str(replacement);
                    rest = stripped;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(first) = chars.next() {
                output.push(first);
                rest = chars.as_str();
            }
        }
        output
    }
}
