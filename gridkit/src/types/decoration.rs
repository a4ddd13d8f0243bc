use super::Color;

/// One side of a border.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSide {
    pub color: Color,
    pub width: f32,
}

impl BorderSide {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Horizontal dividers of a box. Tables only ever draw rules between rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Borders {
    pub top: Option<BorderSide>,
    pub bottom: Option<BorderSide>,
}

impl Borders {
    pub fn top(side: BorderSide) -> Self {
        Self {
            top: Some(side),
            bottom: None,
        }
    }

    pub fn bottom(side: BorderSide) -> Self {
        Self {
            top: None,
            bottom: Some(side),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decoration {
    pub color: Option<Color>,
    pub borders: Borders,
}

impl Decoration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }
}
