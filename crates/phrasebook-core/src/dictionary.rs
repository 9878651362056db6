use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::config::DictionaryConfig;
use crate::error::{DictionaryError, DictionaryResult};
use crate::replace::Replacer;
use crate::scanner::SectionScanner;

/// A flat dotted-key table of post-processed text sections.
///
/// Loading scans a section-marked buffer and inserts one entry per
/// non-empty key; lookups compose one or more key parts with `.` and
/// fall back to a visible `{{key}}` placeholder on miss. Loading and
/// value rewrites take `&mut self`; everything else reads through
/// `&self`, so a loaded dictionary can be shared freely.
#[derive(Debug, Clone)]
pub struct Dictionary {
    name: String,
    overwrite_allowed: bool,
    tab_spaces: String,
    entries: BTreeMap<String, String>,
    replacer: Option<Replacer>,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Self {
        let replacer = if config.replacements.is_empty() {
            None
        } else {
            Some(Replacer::new(config.replacements))
        };
        Self {
            name: config.name,
            overwrite_allowed: false,
            tab_spaces: " ".repeat(config.tab_spaces),
            entries: BTreeMap::new(),
            replacer,
        }
    }

    /// Builds a dictionary and loads `data` with an empty prefix.
    pub fn parse(config: DictionaryConfig, data: &[u8]) -> DictionaryResult<Self> {
        let mut dictionary = Self::new(config);
        dictionary.load("", data)?;
        Ok(dictionary)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overwrite_allowed(&self) -> bool {
        self.overwrite_allowed
    }

    pub fn set_overwrite_allowed(&mut self, allowed: bool) {
        self.overwrite_allowed = allowed;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scans `data` and inserts every section with a non-empty trimmed
    /// key. A non-empty `prefix` prepends `prefix + "."` to each stored
    /// key. With overwrite disallowed, hitting an existing key stops the
    /// load at that section; entries committed before the conflict stay
    /// in place.
    pub fn load(&mut self, prefix: &str, data: &[u8]) -> DictionaryResult<()> {
        for section in SectionScanner::new(data) {
            let key = section.key.trim_ascii();
            if key.is_empty() {
                continue;
            }
            let key = String::from_utf8_lossy(key);
            let key = if prefix.is_empty() {
                key.into_owned()
            } else {
                format!("{prefix}.{key}")
            };
            if !self.overwrite_allowed && self.entries.contains_key(&key) {
                return Err(DictionaryError::DuplicateKey(key));
            }
            let value = self.process_body(section.body);
            self.entries.insert(key, value);
        }
        Ok(())
    }

    fn process_body(&self, body: &[u8]) -> String {
        let trimmed = body.trim_ascii();
        let mut value = String::from_utf8_lossy(trimmed).replace("\\t", &self.tab_spaces);
        if let Some(replacer) = &self.replacer {
            value = replacer.replace(&value);
        }
        value
    }

    pub fn find(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The stored value, or the `{{key}}` placeholder on a miss. Hits
    /// borrow straight from the store.
    pub fn get(&self, key: &str) -> Cow<'_, str> {
        match self.entries.get(key) {
            Some(value) => Cow::Borrowed(value.as_str()),
            None => Cow::Owned(placeholder(key)),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Multi-part lookup: parts are joined with `.` into one composite
    /// key. A single part takes the allocation-free path.
    pub fn find_path(&self, parts: &[&str]) -> Option<&str> {
        if let [key] = parts {
            return self.find(key);
        }
        self.find(&compose_key(parts))
    }

    pub fn get_path(&self, parts: &[&str]) -> Cow<'_, str> {
        if let [key] = parts {
            return self.get(key);
        }
        let key = compose_key(parts);
        match self.entries.get(&key) {
            Some(value) => Cow::Borrowed(value.as_str()),
            None => Cow::Owned(placeholder(&key)),
        }
    }

    pub fn has_path(&self, parts: &[&str]) -> bool {
        if let [key] = parts {
            return self.has(key);
        }
        self.entries.contains_key(&compose_key(parts))
    }

    /// Every stored key; order is not part of the contract.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every stored `(key, value)` pair; order is not part of the
    /// contract.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Rewrites every value in place as `transform(key, value)`. Keys
    /// are never added or removed.
    pub fn map_values<F>(&mut self, mut transform: F)
    where
        F: FnMut(&str, &str) -> String,
    {
        for (key, value) in &mut self.entries {
            *value = transform(key, value);
        }
    }
}

fn placeholder(key: &str) -> String {
    format!("{{{{{key}}}}}")
}

fn compose_key(parts: &[&str]) -> String {
    let mut capacity = parts.len().saturating_sub(1);
    for part in parts {
        capacity += part.len();
    }
    let mut key = String::with_capacity(capacity);
    for (index, part) in parts.iter().enumerate() {
        if index != 0 {
            key.push('.');
        }
        key.push_str(part);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::{compose_key, Dictionary};
    use crate::config::DictionaryConfig;
    use crate::error::DictionaryError;

    fn dictionary(data: &str) -> Dictionary {
        Dictionary::parse(DictionaryConfig::default(), data.as_bytes()).expect("parse")
    }

    #[test]
    fn input_without_headers_stores_nothing() {
        let dictionary = dictionary("just text\nacross lines\n");
        assert!(dictionary.is_empty());
    }

    #[test]
    fn stores_colon_and_bare_sections() {
        let dictionary = dictionary("## a : hello\n## b\nworld\n");
        assert_eq!(dictionary.find("a"), Some("hello"));
        assert_eq!(dictionary.find("b"), Some("world"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn colon_body_keeps_the_header_rest_as_first_content() {
        let dictionary = dictionary("## a : first line\nsecond line\n## b\nx\n");
        assert_eq!(dictionary.find("a"), Some("first line\nsecond line"));
    }

    #[test]
    fn bodies_are_trimmed_of_surrounding_whitespace() {
        let dictionary = dictionary("## a\n\n  padded  \n\n## b\nx\n");
        assert_eq!(dictionary.find("a"), Some("padded"));
    }

    #[test]
    fn keys_are_trimmed_before_storage() {
        let dictionary = dictionary("##   spaced   \nbody\n");
        assert_eq!(dictionary.find("spaced"), Some("body"));
    }

    #[test]
    fn empty_key_sections_are_discarded() {
        let dictionary = dictionary("preamble\n##\nlost\n##   \nalso lost\n## kept\nbody\n");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.find("kept"), Some("body"));
    }

    #[test]
    fn tab_escape_expands_to_configured_spaces() {
        let config = DictionaryConfig {
            tab_spaces: 2,
            ..DictionaryConfig::default()
        };
        let dictionary = Dictionary::parse(config, b"## x\nfoo\\tbar\n").expect("parse");
        assert_eq!(dictionary.find("x"), Some("foo  bar"));
    }

    #[test]
    fn default_tab_width_erases_the_escape() {
        let dictionary = dictionary("## x\nfoo\\tbar\n");
        assert_eq!(dictionary.find("x"), Some("foobar"));
    }

    #[test]
    fn replacements_apply_to_every_body() {
        let config = DictionaryConfig {
            replacements: vec![("{APP}".to_string(), "demo".to_string())],
            ..DictionaryConfig::default()
        };
        let dictionary =
            Dictionary::parse(config, b"## a : welcome to {APP}\n## b\n{APP} rocks\n")
                .expect("parse");
        assert_eq!(dictionary.find("a"), Some("welcome to demo"));
        assert_eq!(dictionary.find("b"), Some("demo rocks"));
    }

    #[test]
    fn duplicate_key_fails_when_overwrite_is_disallowed() {
        let err = Dictionary::parse(DictionaryConfig::default(), b"## a\none\n## a\ntwo\n")
            .expect_err("duplicate");
        assert_eq!(err, DictionaryError::DuplicateKey("a".to_string()));
    }

    #[test]
    fn duplicate_key_wins_when_overwrite_is_allowed() {
        let mut dictionary = Dictionary::new(DictionaryConfig::default());
        dictionary.set_overwrite_allowed(true);
        dictionary
            .load("", b"## a\none\n## a\ntwo\n")
            .expect("load");
        assert_eq!(dictionary.find("a"), Some("two"));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn entries_before_a_conflict_survive_the_failed_load() {
        // Partial commit on conflict is documented behavior, not an
        // accident: the load stops at the conflicting section and keeps
        // everything inserted before it.
        let mut dictionary = Dictionary::new(DictionaryConfig::default());
        dictionary.load("", b"## a\none\n").expect("first load");
        let err = dictionary
            .load("", b"## b\ntwo\n## a\nagain\n## c\nnever\n")
            .expect_err("duplicate");
        assert_eq!(err, DictionaryError::DuplicateKey("a".to_string()));
        assert_eq!(dictionary.find("a"), Some("one"));
        assert_eq!(dictionary.find("b"), Some("two"));
        assert!(!dictionary.has("c"));
    }

    #[test]
    fn prefix_qualifies_every_stored_key() {
        let mut dictionary = Dictionary::new(DictionaryConfig::default());
        dictionary.load("menu", b"## title\nFile\n").expect("load");
        assert_eq!(dictionary.find("menu.title"), Some("File"));
        assert!(!dictionary.has("title"));
    }

    #[test]
    fn duplicate_detection_uses_the_prefixed_key() {
        let mut dictionary = Dictionary::new(DictionaryConfig::default());
        dictionary.load("a", b"## k\nx\n").expect("load");
        dictionary.load("b", b"## k\ny\n").expect("other prefix");
        let err = dictionary.load("a", b"## k\nz\n").expect_err("duplicate");
        assert_eq!(err, DictionaryError::DuplicateKey("a.k".to_string()));
    }

    #[test]
    fn missing_key_returns_the_placeholder() {
        let dictionary = dictionary("## a\nx\n");
        assert_eq!(dictionary.get("missing"), "{{missing}}");
        assert_eq!(dictionary.find("missing"), None);
        assert!(!dictionary.has("missing"));
    }

    #[test]
    fn composite_lookup_joins_parts_with_dots() {
        let dictionary = dictionary("## svc.timeout : 30s\n");
        assert_eq!(dictionary.find_path(&["svc", "timeout"]), Some("30s"));
        assert_eq!(dictionary.get_path(&["svc", "timeout"]), "30s");
        assert!(dictionary.has_path(&["svc", "timeout"]));
    }

    #[test]
    fn composite_miss_formats_the_joined_placeholder() {
        let dictionary = dictionary("## a\nx\n");
        assert_eq!(dictionary.get_path(&["a", "b"]), "{{a.b}}");
        assert_eq!(dictionary.find_path(&["a", "b"]), None);
    }

    #[test]
    fn single_part_path_matches_plain_lookup() {
        let dictionary = dictionary("## only\nvalue\n");
        assert_eq!(dictionary.get_path(&["only"]), "value");
        assert_eq!(dictionary.get_path(&["gone"]), "{{gone}}");
    }

    #[test]
    fn keys_and_iter_visit_every_entry() {
        let dictionary = dictionary("## b\n2\n## a\n1\n");
        let mut keys: Vec<&str> = dictionary.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["a", "b"]);
        let pairs: Vec<(String, String)> = dictionary
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        assert!(pairs.contains(&("a".to_string(), "1".to_string())));
        assert!(pairs.contains(&("b".to_string(), "2".to_string())));
    }

    #[test]
    fn identity_transform_leaves_values_unchanged() {
        let mut dictionary = dictionary("## a\none\n## b\ntwo\n");
        dictionary.map_values(|_, value| value.to_string());
        assert_eq!(dictionary.find("a"), Some("one"));
        assert_eq!(dictionary.find("b"), Some("two"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn map_values_rewrites_in_place() {
        let mut dictionary = dictionary("## a\nx\n## b\ny\n");
        dictionary.map_values(|key, value| format!("{key}={value}"));
        assert_eq!(dictionary.find("a"), Some("a=x"));
        assert_eq!(dictionary.find("b"), Some("b=y"));
    }

    #[test]
    fn compose_key_places_separators_only_between_parts() {
        assert_eq!(compose_key(&["a"]), "a");
        assert_eq!(compose_key(&["a", "b", "c"]), "a.b.c");
        assert_eq!(compose_key(&[]), "");
    }

    #[test]
    fn name_is_carried_from_the_config() {
        let config = DictionaryConfig {
            name: "menus".to_string(),
            ..DictionaryConfig::default()
        };
        let dictionary = Dictionary::new(config);
        assert_eq!(dictionary.name(), "menus");
        assert!(!dictionary.overwrite_allowed());
    }
}
