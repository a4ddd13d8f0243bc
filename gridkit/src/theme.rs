use crate::types::Color;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Minimal light theme.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub primary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub divider: Color,
    pub disabled: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            primary: Color::Rgb { r: 0x62, g: 0x00, b: 0xee, a: 1.0 },
            surface: Color::Rgb { r: 0xff, g: 0xff, b: 0xff, a: 1.0 },
            on_surface: Color::Rgb { r: 0x00, g: 0x00, b: 0x00, a: 0.87 },
            divider: Color::Rgb { r: 0x00, g: 0x00, b: 0x00, a: 0.12 },
            disabled: Color::Rgb { r: 0x00, g: 0x00, b: 0x00, a: 0.38 },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "primary" => Some(&self.primary),
            "surface" => Some(&self.surface),
            "on_surface" => Some(&self.on_surface),
            "divider" => Some(&self.divider),
            "disabled" => Some(&self.disabled),
            _ => None,
        }
    }
}

/// Longest chain of variable aliases a theme lookup follows.
pub const MAX_ALIAS_DEPTH: usize = 16;

/// Context for resolving color variables against a theme.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete Color (no Var variants).
    ///
    /// Themes may alias one variable to another. Alias chains longer than
    /// [`MAX_ALIAS_DEPTH`] (cycles included) resolve to transparent.
    pub fn resolve(&self, color: &Color) -> Color {
        let mut current = color;
        for _ in 0..=MAX_ALIAS_DEPTH {
            let Color::Var(name) = current else {
                return current.clone();
            };
            match self.theme.resolve(name) {
                Some(resolved) => current = resolved,
                None => {
                    log::warn!("Unknown theme color '{}', using transparent", name);
                    return Color::TRANSPARENT;
                }
            }
        }
        log::warn!("Theme color alias chain from '{}' too deep, using transparent", color);
        Color::TRANSPARENT
    }

    /// Resolve a theme variable by name.
    pub fn named(&self, name: &str) -> Color {
        self.resolve(&Color::var(name))
    }
}
