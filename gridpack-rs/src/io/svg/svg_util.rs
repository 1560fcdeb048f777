use crate::geometry::primitives::Rect;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    pub theme: SvgLayoutTheme,
    ///Draw the id of each piece at its center
    pub show_piece_ids: bool,
    ///Draw pieces that overlap or stick out of the container in the highlight color
    pub highlight_collisions: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            show_piece_ids: true,
            highlight_collisions: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub container_fill: Color,
    pub piece_fill: Color,
    pub collision_highlight_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        container_fill: Color(0xCC, 0x82, 0x4A),
        piece_fill: Color(0xFF, 0xC8, 0x79),
        collision_highlight_color: Color(0x00, 0xFF, 0x00), // LIME
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        container_fill: Color(0xD3, 0xD3, 0xD3),
        piece_fill: Color(0x7A, 0x7A, 0x7A),
        collision_highlight_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    let corners = rect.corners();
    let mut data = Data::new().move_to::<(f64, f64)>(corners[0].into());
    for corner in &corners[1..] {
        data = data.line_to::<(f64, f64)>((*corner).into());
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    params
        .iter()
        .fold(Path::new(), |path, param| path.set(param.0, param.1))
        .set("d", data)
}
