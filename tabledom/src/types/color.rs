#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    /// A CSS colour keyword (or any other colour text), emitted verbatim.
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Parse colour text. `#rgb` and `#rrggbb` become [`Color::Rgb`];
    /// everything else is kept as [`Color::Named`] and passed through.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            if let Some(rgb) = parse_hex(hex) {
                return Self::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                };
            }
        }
        Self::Named(trimmed.to_string())
    }

    /// Resolve to sRGB. Unknown colour names yield `None`.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h, .. } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Named(name) => named_to_rgb(name),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b).to_hex(),
            Self::Oklch { l, c, h, a } => {
                let rgb = oklch_to_rgb(*l, *c, *h);
                if *a < 1.0 {
                    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, a)
                } else {
                    rgb.to_hex()
                }
            }
            Self::Named(name) => name.clone(),
        }
    }
}

impl From<&str> for Color {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Some(Rgb::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => None,
    }
}

fn named_to_rgb(name: &str) -> Option<Rgb> {
    let srgb = palette::named::from_str(&name.to_ascii_lowercase())?;
    let (r, g, b) = srgb.into_components();
    Some(Rgb::new(r, g, b))
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
