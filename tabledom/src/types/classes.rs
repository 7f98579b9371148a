use std::fmt;

/// An ordered set of CSS class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split on whitespace, dropping empty and repeated tokens.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        for token in classes.split_whitespace() {
            list.push(token);
        }
        list
    }

    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() && !self.contains(&token) {
            self.0.push(token);
        }
    }

    pub fn extend(&mut self, other: ClassList) {
        for token in other.0 {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.extend(Self::parse(item.as_ref()));
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_and_dedups() {
        let list = ClassList::parse("  a b\ta  c ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(list.to_string(), "a b c");
    }

    #[test]
    fn test_empty_string_is_empty_list() {
        assert!(ClassList::parse("").is_empty());
    }
}
