mod content;
mod node;
mod outline;

pub use content::{Content, Icon};
pub use node::Element;
pub use outline::outline;

/// Find an element by ID in the tree, descending into table cells.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    match &root.content {
        Content::Children(children) => children.iter().find_map(|child| find_element(child, id)),
        Content::Table(table) => table
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find_map(|cell| find_element(cell, id)),
        _ => None,
    }
}
