use std::fmt::Write;

use super::{Content, Element};
use crate::types::Size;

/// Render an indented, human-readable description of an element tree.
///
/// Used for debugging and snapshot-style assertions; the format is not stable.
pub fn outline(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, 0, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}#{}", element.id);
    if let Size::Fixed(w) = element.width {
        let _ = write!(out, " w={w:.1}");
    }
    if let Size::Fixed(h) = element.height {
        let _ = write!(out, " h={h:.1}");
    }
    if element.opacity < 1.0 {
        let _ = write!(out, " opacity={:.2}", element.opacity);
    }
    if element.rotation != 0.0 {
        let _ = write!(out, " rotation={:.3}", element.rotation);
    }
    if element.disabled {
        out.push_str(" disabled");
    }
    if let Some(color) = &element.decoration.color {
        let _ = write!(out, " bg={color}");
    }

    match &element.content {
        Content::None => out.push('\n'),
        Content::Text(text) => {
            let _ = writeln!(out, " {text:?}");
        }
        Content::Icon { icon, size } => {
            let _ = writeln!(out, " icon={icon:?} size={size}");
        }
        Content::Checkbox { value, tristate } => {
            let _ = writeln!(out, " checkbox={value:?} tristate={tristate}");
        }
        Content::Children(children) => {
            let _ = writeln!(out, " {:?}", element.direction);
            for child in children {
                write_element(child, depth + 1, out);
            }
        }
        Content::Table(table) => {
            let widths: Vec<String> = table.columns.iter().map(|w| format!("{w:.1}")).collect();
            let _ = writeln!(out, " table[{}]", widths.join(", "));
            for row in &table.rows {
                let _ = writeln!(
                    out,
                    "{indent}  row{}",
                    row.key.as_deref().map(|k| format!(" key={k}")).unwrap_or_default()
                );
                for cell in &row.cells {
                    write_element(cell, depth + 2, out);
                }
            }
        }
    }
}
