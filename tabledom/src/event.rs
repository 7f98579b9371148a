use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Two clicks in quick succession
    DoubleClick {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// Secondary-button click
    ContextMenu {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// Pointer entered the element
    MouseEnter { target: String },
    /// Pointer left the element
    MouseLeave { target: String },
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::DoubleClick { .. } => EventKind::DoubleClick,
            Self::ContextMenu { .. } => EventKind::ContextMenu,
            Self::MouseEnter { .. } => EventKind::MouseEnter,
            Self::MouseLeave { .. } => EventKind::MouseLeave,
            Self::Key { .. } => EventKind::Key,
            Self::Focus { .. } => EventKind::Focus,
            Self::Blur { .. } => EventKind::Blur,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. }
            | Self::DoubleClick { target, .. }
            | Self::ContextMenu { target, .. }
            | Self::Key { target, .. } => target.as_deref(),
            Self::MouseEnter { target }
            | Self::MouseLeave { target }
            | Self::Focus { target }
            | Self::Blur { target } => Some(target),
        }
    }

    /// A default event of `kind` aimed at `target`, as a test harness would fire it.
    pub fn synthetic(kind: EventKind, target: &str) -> Self {
        let target = target.to_string();
        match kind {
            EventKind::Click => Self::Click {
                target: Some(target),
                x: 0,
                y: 0,
                button: MouseButton::Left,
            },
            EventKind::DoubleClick => Self::DoubleClick {
                target: Some(target),
                x: 0,
                y: 0,
            },
            EventKind::ContextMenu => Self::ContextMenu {
                target: Some(target),
                x: 0,
                y: 0,
            },
            EventKind::MouseEnter => Self::MouseEnter { target },
            EventKind::MouseLeave => Self::MouseLeave { target },
            EventKind::Key => Self::Key {
                target: Some(target),
                key: Key::Enter,
                modifiers: Modifiers::new(),
            },
            EventKind::Focus => Self::Focus { target },
            EventKind::Blur => Self::Blur { target },
        }
    }
}

/// The kind of an [`Event`], used to key handler maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    DoubleClick,
    ContextMenu,
    MouseEnter,
    MouseLeave,
    Key,
    Focus,
    Blur,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No handler for this event kind.
    Ignored,
    /// A handler ran.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Event handlers keyed by kind. Cloning shares the handlers.
#[derive(Clone, Default)]
pub struct Handlers {
    inner: BTreeMap<EventKind, EventHandler>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.insert(kind, handler);
        self
    }

    pub fn insert<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.inner.insert(kind, Arc::new(handler));
    }

    pub fn extend(&mut self, other: Handlers) {
        self.inner.extend(other.inner);
    }

    pub fn get(&self, kind: EventKind) -> Option<&EventHandler> {
        self.inner.get(&kind)
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.inner.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.inner.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.keys()).finish()
    }
}

// Handlers compare by identity: same kinds bound to the same closures.
impl PartialEq for Handlers {
    fn eq(&self, other: &Self) -> bool {
        self.inner.len() == other.inner.len()
            && self
                .inner
                .iter()
                .zip(other.inner.iter())
                .all(|((ka, ha), (kb, hb))| ka == kb && Arc::ptr_eq(ha, hb))
    }
}
