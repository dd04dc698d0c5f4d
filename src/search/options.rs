use std::fmt::Display;

/// Name of the result-count parameter
pub const RESULT_SIZE_PARAM: &str = "rsz";

/// Extra query parameters for a search call (safe search, language, page size...)
///
/// Parameters keep the order they were first set in, so the request URL
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: Vec<(String, String)>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    /// Set a parameter. An existing parameter keeps its position and gets the new value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Display) {
        let name = name.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.params.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.params.iter().position(|(n, _)| n == name)?;
        Some(self.params.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = QueryOptions::new();
        for (name, value) in iter {
            options.set(name, value);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let options = QueryOptions::new()
            .with("safe", "active")
            .with("hl", "en")
            .with("start", 8);

        let names: Vec<&str> = options.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["safe", "hl", "start"]);
        assert_eq!(options.get("start"), Some("8"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut options = QueryOptions::new().with("rsz", 4).with("safe", "off");
        options.set("rsz", 8);

        assert_eq!(options.len(), 2);
        assert_eq!(options.iter().next(), Some(("rsz", "8")));
    }

    #[test]
    fn test_remove() {
        let mut options: QueryOptions = vec![("safe", "active"), ("hl", "fr")].into_iter().collect();
        assert_eq!(options.remove("safe"), Some("active".to_string()));
        assert_eq!(options.remove("safe"), None);
        assert!(!options.contains("safe"));
        assert!(options.contains("hl"));
    }

    #[test]
    fn test_default_is_empty() {
        let options = QueryOptions::default();
        assert!(options.is_empty());
        assert_eq!(options.get(RESULT_SIZE_PARAM), None);
    }
}
