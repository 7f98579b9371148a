use std::collections::BTreeMap;

use heck::ToKebabCase;

use super::{Color, TextAlign, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
    pub text_align: Option<TextAlign>,
    /// Any other CSS property, written out as given.
    pub properties: BTreeMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    /// Set a CSS property by name, camelCase or kebab-case.
    ///
    /// Properties the typed fields cover are routed there; values they cannot
    /// represent, and every other property, are kept verbatim.
    pub fn property(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let key = css_name(name);
        match key.as_str() {
            "background-color" => self.background = Some(Color::parse(&value)),
            // the shorthand only maps to a colour when the whole value is one
            "background" if Color::parse(&value).to_rgb().is_some() => {
                self.background = Some(Color::parse(&value))
            }
            "color" => self.foreground = Some(Color::parse(&value)),
            "font-weight" if matches!(value.trim(), "bold" | "700") => self.text_style.bold = true,
            "font-style" if value.trim() == "italic" => self.text_style.italic = true,
            "text-decoration" if value.trim() == "underline" => self.text_style.underline = true,
            "text-decoration" if value.trim() == "line-through" => {
                self.text_style.strikethrough = true
            }
            "text-align" if TextAlign::parse(&value).is_some() => {
                self.text_align = TextAlign::parse(&value)
            }
            _ => {
                self.properties.insert(key, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.foreground.is_none()
            && self.text_style.is_plain()
            && self.text_align.is_none()
            && self.properties.is_empty()
    }

    /// Serialize as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<(String, String)> = Vec::new();
        if let Some(bg) = &self.background {
            decls.push(("background-color".into(), bg.to_css()));
        }
        if let Some(fg) = &self.foreground {
            decls.push(("color".into(), fg.to_css()));
        }
        if self.text_style.bold {
            decls.push(("font-weight".into(), "bold".into()));
        }
        if self.text_style.italic {
            decls.push(("font-style".into(), "italic".into()));
        }
        let decorations: Vec<&str> = [
            (self.text_style.underline, "underline"),
            (self.text_style.strikethrough, "line-through"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if !decorations.is_empty() {
            decls.push(("text-decoration".into(), decorations.join(" ")));
        }
        if let Some(align) = self.text_align {
            decls.push(("text-align".into(), align.as_css().into()));
        }
        for (name, value) in &self.properties {
            decls.push((name.clone(), value.clone()));
        }

        decls
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// `backgroundColor` -> `background-color`.
///
/// Names that already contain a dash (kebab-case, vendor prefixes, `--custom`
/// properties) are kept as written; custom properties are case-sensitive.
fn css_name(name: &str) -> String {
    let name = name.trim();
    if name.contains('-') {
        name.to_string()
    } else {
        name.to_kebab_case()
    }
}
