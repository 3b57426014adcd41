/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0x00RRGGBB`, the pixel layout of framebuffer
    /// windows.
    ///
    /// # Example
    /// ```
    /// use stacko::interpreter::device::color::Rgb;
    ///
    /// assert_eq!(Rgb::new(0xff, 0xcc, 0x00).to_pixel(), 0x00ff_cc00);
    /// ```
    #[must_use]
    pub const fn to_pixel(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

const NAMED: &[(&str, Rgb)] = &[("black", Rgb::new(0, 0, 0)),
                                ("white", Rgb::new(255, 255, 255)),
                                ("red", Rgb::new(255, 0, 0)),
                                ("green", Rgb::new(0, 255, 0)),
                                ("blue", Rgb::new(0, 0, 255)),
                                ("yellow", Rgb::new(255, 255, 0)),
                                ("cyan", Rgb::new(0, 255, 255)),
                                ("magenta", Rgb::new(255, 0, 255)),
                                ("gray", Rgb::new(190, 190, 190)),
                                ("grey", Rgb::new(190, 190, 190)),
                                ("darkgray", Rgb::new(169, 169, 169)),
                                ("darkgrey", Rgb::new(169, 169, 169)),
                                ("lightgray", Rgb::new(211, 211, 211)),
                                ("lightgrey", Rgb::new(211, 211, 211)),
                                ("orange", Rgb::new(255, 165, 0)),
                                ("purple", Rgb::new(160, 32, 240)),
                                ("pink", Rgb::new(255, 192, 203)),
                                ("brown", Rgb::new(165, 42, 42)),
                                ("navy", Rgb::new(0, 0, 128)),
                                ("darkblue", Rgb::new(0, 0, 139)),
                                ("lightblue", Rgb::new(173, 216, 230)),
                                ("skyblue", Rgb::new(135, 206, 235)),
                                ("darkgreen", Rgb::new(0, 100, 0)),
                                ("lightgreen", Rgb::new(144, 238, 144)),
                                ("darkred", Rgb::new(139, 0, 0)),
                                ("gold", Rgb::new(255, 215, 0)),
                                ("violet", Rgb::new(238, 130, 238)),
                                ("turquoise", Rgb::new(64, 224, 208)),
                                ("coral", Rgb::new(255, 127, 80)),
                                ("salmon", Rgb::new(250, 128, 114)),
                                ("beige", Rgb::new(245, 245, 220)),
                                ("olive", Rgb::new(128, 128, 0)),
                                ("teal", Rgb::new(0, 128, 128)),
                                ("maroon", Rgb::new(176, 48, 96))];

/// Parses a color name or hex notation.
///
/// Names are matched case-insensitively with spaces ignored (`Light Blue` is
/// `lightblue`). Hex colors are written `#rgb`, `#rrggbb`, `#rrggbbaa` or
/// `0xrrggbb`; an alpha channel is accepted and dropped.
///
/// # Example
/// ```
/// use stacko::interpreter::device::color::{Rgb, parse_color};
///
/// assert_eq!(parse_color("Sky Blue"), Some(Rgb::new(135, 206, 235)));
/// assert_eq!(parse_color("#f00"), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(parse_color("0x00ff00"), Some(Rgb::new(0, 255, 0)));
/// assert_eq!(parse_color("mauve-ish"), None);
/// ```
#[must_use]
pub fn parse_color(name: &str) -> Option<Rgb> {
    let name = name.trim();

    if let Some(hex) = name.strip_prefix('#').or_else(|| name.strip_prefix("0x")) {
        return parse_hex(hex);
    }

    let normalized: String =
        name.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect();

    NAMED.iter().find(|(n, _)| *n == normalized).map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some(Rgb::new(digit(0)?, digit(1)?, digit(2)?))
        },
        6 | 8 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
        },
        _ => None,
    }
}
