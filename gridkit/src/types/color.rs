use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8, a: f32 },
    /// Named theme color, resolved through a [`ColorContext`](crate::ColorContext).
    Var(String),
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
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color")]
    Empty,
    #[error("invalid hex color '{0}'")]
    Hex(String),
    #[error("invalid color function '{0}'")]
    Function(String),
}

impl Color {
    pub const TRANSPARENT: Self = Self::Rgb {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgb { r, g, b, a }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Alpha channel. Unresolved variables report fully opaque.
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } | Self::Rgb { a, .. } => *a,
            Self::Var(_) => 1.0,
        }
    }

    /// Replace the alpha channel. Variables are returned unchanged and must be
    /// resolved first.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a: alpha },
            Self::Rgb { r, g, b, .. } => Self::Rgb { r, g, b, a: alpha },
            var @ Self::Var(_) => var,
        }
    }

    pub fn is_transparent(&self) -> bool {
        !matches!(self, Self::Var(_)) && self.alpha() <= 0.0
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    format!("oklch({l}, {c}, {h})")
                } else {
                    format!("oklch({l}, {c}, {h}, {a})")
                }
            }
            Self::Rgb { r, g, b, a } => {
                if *a >= 1.0 {
                    format!("rgb({r}, {g}, {b})")
                } else {
                    format!("rgba({r}, {g}, {b}, {a})")
                }
            }
            Self::Var(name) => name.clone(),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b, .. } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
            Self::Var(_) => Rgb::default(), // needs ColorContext to resolve
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dsl())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`, `oklch(..)`,
    /// `transparent`, or a bare theme variable name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError::Hex(s.to_string()));
        }
        if let Some((name, rest)) = s.split_once('(') {
            let args = rest
                .strip_suffix(')')
                .ok_or_else(|| ParseColorError::Function(s.to_string()))?;
            return parse_function(name.trim(), args)
                .ok_or_else(|| ParseColorError::Function(s.to_string()));
        }
        Ok(Self::Var(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 {
        f32::from(channel(6)?) / 255.0
    } else {
        1.0
    };
    Some(Color::rgba(r, g, b, a))
}

fn parse_function(name: &str, args: &str) -> Option<Color> {
    let values: Vec<f32> = args
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;

    let byte = |v: f32| (0.0..=255.0).contains(&v).then(|| v.round() as u8);

    match (name, values.as_slice()) {
        ("rgb", [r, g, b]) => Some(Color::rgb(byte(*r)?, byte(*g)?, byte(*b)?)),
        ("rgba", [r, g, b, a]) => Some(Color::rgba(byte(*r)?, byte(*g)?, byte(*b)?, *a)),
        ("oklch", [l, c, h]) => Some(Color::oklch(*l, *c, *h)),
        ("oklch", [l, c, h, a]) => Some(Color::oklcha(*l, *c, *h, *a)),
        _ => None,
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
