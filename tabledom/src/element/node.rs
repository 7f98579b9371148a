use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::event::{Event, EventKind, EventResult, Handlers};
use crate::types::{ClassList, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Visual
    pub style: Style,
    pub classes: ClassList,

    /// Plain string attributes (`title`, `data-*`, `aria-*`, ...).
    pub attributes: BTreeMap<String, String>,

    // Interaction
    pub handlers: Handlers,
}

impl Default for Element {
    fn default() -> Self {
        Self::tag("div")
    }
}

impl Element {
    pub fn tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            content: Content::None,
            style: Style::default(),
            classes: ClassList::default(),
            attributes: BTreeMap::new(),
            handlers: Handlers::default(),
        }
    }

    /// A table data cell.
    pub fn td() -> Self {
        Self::tag("td")
    }

    pub fn tr() -> Self {
        Self::tag("tr")
    }

    pub fn span() -> Self {
        Self::tag("span")
    }

    /// An inline text element.
    pub fn text(content: impl Into<String>) -> Self {
        Self::span().content(Content::Text(content.into()))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace text or empty content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes.extend(ClassList::parse(class.as_ref()));
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes.extend(classes);
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.attribute("title")
    }

    // Interaction
    pub fn on<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.handlers.extend(handlers);
        self
    }

    // Queries
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.contains(kind)
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        self.content.text_content()
    }

    /// Deliver an event to this element's own handler for the event's kind.
    ///
    /// The handler runs synchronously, once, with the event as given.
    pub fn dispatch(&self, event: &Event) -> EventResult {
        let kind = event.kind();
        match self.handlers.get(kind) {
            Some(handler) => {
                log::trace!("[dispatch] {:?} -> {}", kind, self.id);
                handler(event);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Dispatch a default event of `kind` targeted at this element.
    pub fn simulate(&self, kind: EventKind) -> EventResult {
        self.dispatch(&Event::synthetic(kind, &self.id))
    }
}
