use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Icon};
use crate::table::Table;
use crate::types::{Align, Decoration, Direction, Edges, Overflow, Size, Style, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: f32,
    pub justify: Align,
    pub align: Align,

    // Overflow
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,

    // Visual
    pub style: Style,
    pub decoration: Decoration,
    /// Paint opacity in `[0, 1]`.
    pub opacity: f32,
    /// Clockwise rotation in radians around the element's center.
    pub rotation: f32,
    pub text_align: TextAlign,
    pub tooltip: Option<String>,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0.0,
            justify: Align::Start,
            align: Align::Start,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            style: Style::default(),
            decoration: Decoration::default(),
            opacity: 1.0,
            rotation: 0.0,
            text_align: TextAlign::Left,
            tooltip: None,
            clickable: false,
            focusable: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    /// A zero-sized slot that lays out and paints nothing.
    pub fn empty() -> Self {
        Self {
            id: generate_id("empty"),
            width: Size::Fixed(0.0),
            height: Size::Fixed(0.0),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn table(table: Table) -> Self {
        Self {
            id: generate_id("table"),
            content: Content::Table(table),
            width: Size::Fill,
            ..Default::default()
        }
    }

    pub fn icon(icon: Icon, size: f32) -> Self {
        Self {
            id: generate_id("icon"),
            content: Content::Icon { icon, size },
            width: Size::Fixed(size),
            height: Size::Fixed(size),
            ..Default::default()
        }
    }

    pub fn checkbox(value: Option<bool>, tristate: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            content: Content::Checkbox { value, tristate },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Align) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    // Overflow
    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Concatenated text of this element and its descendants, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::Table(table) => {
            for cell in table.rows.iter().flat_map(|row| row.cells.iter()) {
                collect_text(cell, out);
            }
        }
        _ => {}
    }
}
