use super::Element;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    /// Concatenated text of this content and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Self::None => {}
            Self::Text(s) => out.push_str(s),
            Self::Children(children) => {
                for child in children {
                    child.content.collect_text(out);
                }
            }
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Children(vec![element])
    }
}

impl From<Vec<Element>> for Content {
    fn from(children: Vec<Element>) -> Self {
        Self::Children(children)
    }
}
