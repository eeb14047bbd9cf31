//! Tag text to terminal style resolution.
//!
//! Escape generation belongs to `console`; this module only decides which
//! `console::Style` a tag stands for.

use console::{Attribute, Color, Style};

const COLOR_NAMES: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// The accumulated effect of one or more tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StyleSpec {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Vec<Attribute>,
}

impl StyleSpec {
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// `other` layered on top of `self`.
    pub fn merge(&self, other: &StyleSpec) -> StyleSpec {
        let mut attrs = self.attrs.clone();
        for attr in &other.attrs {
            if !attrs.contains(attr) {
                attrs.push(*attr);
            }
        }
        StyleSpec {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs,
        }
    }

    pub fn to_style(&self, force_styling: Option<bool>) -> Style {
        let mut style = Style::new();
        if let Some(force) = force_styling {
            style = style.force_styling(force);
        }
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        for attr in &self.attrs {
            style = style.attr(*attr);
        }
        style
    }

    fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    fn bg(color: Color) -> Self {
        Self {
            bg: Some(color),
            ..Self::default()
        }
    }

    fn attr(attr: Attribute) -> Self {
        Self {
            attrs: vec![attr],
            ..Self::default()
        }
    }
}

/// Resolve a built-in tag: a style word, a color name, or `fg`/`bg` plus a color.
pub(crate) fn parse_tag(tag: &str) -> Option<StyleSpec> {
    if let Some(attr) = parse_attribute(tag) {
        return Some(StyleSpec::attr(attr));
    }
    if let Some((kind, value)) = tag.split_once(' ') {
        let color = parse_color(value.trim())?;
        return match kind {
            "fg" => Some(StyleSpec::fg(color)),
            "bg" => Some(StyleSpec::bg(color)),
            _ => None,
        };
    }
    // Uppercase names color the background.
    let lower = tag.to_ascii_lowercase();
    let color = named_color(&lower)?;
    if tag == lower {
        Some(StyleSpec::fg(color))
    } else if tag == tag.to_ascii_uppercase() {
        Some(StyleSpec::bg(color))
    } else {
        None
    }
}

fn parse_attribute(tag: &str) -> Option<Attribute> {
    let attr = match tag {
        "b" | "bold" => Attribute::Bold,
        "d" | "dim" => Attribute::Dim,
        "i" | "italic" => Attribute::Italic,
        "u" | "underline" => Attribute::Underlined,
        "l" | "blink" => Attribute::Blink,
        "v" | "reverse" => Attribute::Reverse,
        "h" | "hidden" => Attribute::Hidden,
        "s" | "strike" => Attribute::StrikeThrough,
        _ => return None,
    };
    Some(attr)
}

/// Parse a color name, `#RGB`/`#RRGGBB`, a palette index, or `r,g,b`.
pub(crate) fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        let (r, g, b) = parse_hex(hex)?;
        return Some(Color::Color256(rgb_to_ansi256(r, g, b)));
    }
    if let Ok(index) = value.parse::<u8>() {
        return Some(Color::Color256(index));
    }
    if value.contains(',') {
        let parts: Vec<u8> = value
            .split(',')
            .map(|p| p.trim().parse::<u8>().ok())
            .collect::<Option<_>>()?;
        let [r, g, b] = parts[..] else {
            return None;
        };
        return Some(Color::Color256(rgb_to_ansi256(r, g, b)));
    }
    named_color(value)
}

fn named_color(name: &str) -> Option<Color> {
    if let Some(base) = name.strip_prefix("light-") {
        // Palette slots 8..=15 hold the bright variants.
        let index = COLOR_NAMES.iter().position(|(n, _)| *n == base)?;
        return Some(Color::Color256(8 + index as u8));
    }
    COLOR_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, color)| *color)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Nearest xterm 256-color palette index for a truecolor value.
pub(crate) fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((u16::from(r) - 8) * 24 / 247) as u8,
        };
    }
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attribute_words() {
        assert_eq!(parse_tag("b"), parse_tag("bold"));
        assert_eq!(parse_tag("u").unwrap().attrs, vec![Attribute::Underlined]);
        assert_eq!(parse_tag("s").unwrap().attrs, vec![Attribute::StrikeThrough]);
    }

    #[test]
    fn test_lowercase_name_is_foreground() {
        let spec = parse_tag("green").unwrap();
        assert_eq!(spec.fg, Some(Color::Green));
        assert_eq!(spec.bg, None);
    }

    #[test]
    fn test_uppercase_name_is_background() {
        let spec = parse_tag("GREEN").unwrap();
        assert_eq!(spec.fg, None);
        assert_eq!(spec.bg, Some(Color::Green));
        assert_eq!(parse_tag("LIGHT-RED").unwrap().bg, Some(Color::Color256(9)));
        assert_eq!(parse_tag("Green"), None);
    }

    #[test]
    fn test_fg_and_bg_prefixes() {
        assert_eq!(parse_tag("fg red").unwrap().fg, Some(Color::Red));
        assert_eq!(parse_tag("bg 200").unwrap().bg, Some(Color::Color256(200)));
        assert_eq!(
            parse_tag("bg #ff0000").unwrap().bg,
            Some(Color::Color256(196))
        );
        assert_eq!(parse_tag("bg nope"), None);
        assert_eq!(parse_tag("xx red"), None);
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("light-blue"), Some(Color::Color256(12)));
        assert_eq!(parse_color("#f00"), parse_color("#ff0000"));
        assert_eq!(parse_color("255,0,0"), Some(Color::Color256(196)));
        assert_eq!(parse_color("1,2"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(parse_color("#ff000"), None);
        assert_eq!(parse_color("256"), None);
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(0, 0, 255), 21);
        assert_eq!(rgb_to_ansi256(0xfb, 0xfb, 0xfb), 231);
        assert_eq!(rgb_to_ansi256(0xf5, 0xf5, 0xf5), 255);
        assert_eq!(rgb_to_ansi256(128, 128, 128), 243);
    }

    #[test]
    fn test_merge_layers_styles() {
        let outer = parse_tag("red").unwrap().merge(&parse_tag("b").unwrap());
        let inner = outer.merge(&parse_tag("BLUE").unwrap());
        assert_eq!(inner.fg, Some(Color::Red));
        assert_eq!(inner.bg, Some(Color::Blue));
        assert_eq!(inner.attrs, vec![Attribute::Bold]);
        let recolored = inner.merge(&parse_tag("fg green").unwrap());
        assert_eq!(recolored.fg, Some(Color::Green));
    }
}
