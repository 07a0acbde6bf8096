//! Parsed page wrapper around the kuchiki DOM.
//!
//! The rewrite passes never touch raw document text; they navigate and edit
//! the parsed tree. The one textual surface left is the content of `<style>`
//! elements, exposed through [`Page::edit_styles`].

use std::io;

use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::error::RetouchError;

/// A parsed HTML page, mutated in place by the rewrite passes.
pub struct Page {
    root: NodeRef,
}

impl Page {
    /// Parse a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// All elements matching a CSS selector, collected up front so the tree
    /// can be mutated while iterating over them.
    ///
    /// Selectors here are compile-time constants; an invalid one selects
    /// nothing.
    pub fn select_all(&self, selector: &str) -> Vec<NodeDataRef<ElementData>> {
        self.root
            .select(selector)
            .map(Iterator::collect)
            .unwrap_or_default()
    }

    /// Edit the text of every `<style>` element. The callback returns the
    /// replacement text, or `None` to leave that element alone. Returns how
    /// many elements were edited.
    pub fn edit_styles(&self, edit: impl Fn(&str) -> Option<String>) -> usize {
        let mut edited = 0;
        for style in self.select_all("style") {
            let node = style.as_node();
            let text = node.text_contents();
            if let Some(new_text) = edit(&text) {
                for child in node.children().collect::<Vec<_>>() {
                    child.detach();
                }
                node.append(NodeRef::new_text(new_text));
                edited += 1;
            }
        }
        edited
    }

    /// Serialize the page back to an HTML string.
    pub fn to_html(&self) -> Result<String, RetouchError> {
        let mut out = Vec::new();
        self.root
            .serialize(&mut out)
            .map_err(RetouchError::Serialize)?;
        String::from_utf8(out)
            .map_err(|err| RetouchError::Serialize(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

// =============================================================================
// Tree helpers
// =============================================================================

/// Parse an HTML fragment and return its top-level nodes, detached and ready
/// to insert into another tree.
pub fn fragment(html: &str) -> Vec<NodeRef> {
    let doc = kuchiki::parse_html().one(html);
    let Ok(body) = doc.select_first("body") else {
        return Vec::new();
    };
    let nodes: Vec<NodeRef> = body.as_node().children().collect();
    for node in &nodes {
        node.detach();
    }
    nodes
}

/// Insert fragment nodes, in order, immediately after `node`.
pub fn insert_fragment_after(node: &NodeRef, html: &str) {
    let mut anchor = node.clone();
    for piece in fragment(html) {
        anchor.insert_after(piece.clone());
        anchor = piece;
    }
}

/// Append fragment nodes, in order, as the last children of `node`.
pub fn append_fragment(node: &NodeRef, html: &str) {
    for piece in fragment(html) {
        node.append(piece);
    }
}

/// Nearest following sibling element with the given tag name.
pub fn next_sibling_element(node: &NodeRef, tag: &str) -> Option<NodeRef> {
    node.following_siblings()
        .find(|sibling| is_element_named(sibling, tag))
}

/// Nearest ancestor element with the given tag name.
pub fn ancestor_element(node: &NodeRef, tag: &str) -> Option<NodeRef> {
    node.ancestors().find(|ancestor| is_element_named(ancestor, tag))
}

fn is_element_named(node: &NodeRef, tag: &str) -> bool {
    node.as_element()
        .is_some_and(|element| &*element.name.local == tag)
}
