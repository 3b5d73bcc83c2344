//! Color styles and their CSS translation

use palette::{Hsv, IntoColor, Srgb};
use syntect::highlighting::{Color, FontStyle, Style};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scale the HSV saturation channel by `factor` (clamped to 0..=1)
    pub fn desaturate(self, factor: f32) -> Self {
        if factor >= 1.0 || factor.is_nan() {
            return self;
        }

        let rgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let mut hsv: Hsv = rgb.into_color();
        hsv.saturation *= factor.max(0.0);
        let rgb: Srgb<f32> = hsv.into_color();
        let rgb: Srgb<u8> = rgb.into_format();

        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

/// Foreground/background colors plus font attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorStyle {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl ColorStyle {
    pub fn with_foreground(foreground: Rgb) -> Self {
        Self {
            foreground: Some(foreground),
            ..Self::default()
        }
    }

    pub fn without_background(self) -> Self {
        Self {
            background: None,
            ..self
        }
    }

    /// Apply a saturation factor to both colors
    pub fn desaturated(self, factor: f32) -> Self {
        Self {
            foreground: self.foreground.map(|c| c.desaturate(factor)),
            background: self.background.map(|c| c.desaturate(factor)),
            ..self
        }
    }

    /// Inline CSS declarations, e.g. `color:#c0c5ce;font-weight:bold;`
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(fg) = self.foreground {
            css.push_str("color:");
            css.push_str(&fg.to_hex());
            css.push(';');
        }
        if let Some(bg) = self.background {
            css.push_str("background-color:");
            css.push_str(&bg.to_hex());
            css.push(';');
        }
        if self.bold {
            css.push_str("font-weight:bold;");
        }
        if self.italic {
            css.push_str("font-style:italic;");
        }
        if self.underline {
            css.push_str("text-decoration:underline;");
        }
        css
    }
}

impl From<Style> for ColorStyle {
    fn from(style: Style) -> Self {
        // syntect marks "unset" colors with a zero alpha
        let opaque = |c: Color| (c.a != 0).then(|| Rgb::from(c));
        Self {
            foreground: opaque(style.foreground),
            background: opaque(style.background),
            bold: style.font_style.contains(FontStyle::BOLD),
            italic: style.font_style.contains(FontStyle::ITALIC),
            underline: style.font_style.contains(FontStyle::UNDERLINE),
        }
    }
}
