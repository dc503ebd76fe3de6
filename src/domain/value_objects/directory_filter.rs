use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered set of working-directory names that discovery is restricted to.
///
/// An empty filter places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    names: Vec<String>,
}

impl DirectoryFilter {
    /// A filter that accepts every repository
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list; blank entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a working directory with basename `name` passes the filter
    pub fn allows(&self, name: &str) -> bool {
        self.is_empty() || self.names.iter().any(|n| n == name)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DirectoryFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let joined: Vec<String> = iter.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse(&joined.join(","))
    }
}

impl fmt::Display for DirectoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}

impl Serialize for DirectoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DirectoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_string_means_no_restriction() {
        let filter = DirectoryFilter::parse("");
        assert!(filter.is_empty());
        assert!(filter.allows("anything"));
    }

    #[test]
    fn test_parse_trims_and_drops_blanks() {
        let filter = DirectoryFilter::parse(" api, web ,,web");
        assert_eq!(filter.names(), &["api".to_string(), "web".to_string()]);
        assert!(filter.allows("web"));
        assert!(!filter.allows("docs"));
    }

    #[test]
    fn test_only_commas_is_empty() {
        assert!(DirectoryFilter::parse(" , ,").is_empty());
    }

    #[test]
    fn test_deserialize_from_comma_string() {
        let filter: DirectoryFilter = serde_json::from_str("\"x,y\"").unwrap();
        assert_eq!(filter, ["x", "y"].into_iter().collect());
        assert_eq!(filter.to_string(), "x,y");
    }
}
