//! Element-tree abstraction.
//!
//! The widget renders into anything that can look elements up, create them,
//! append children, and assign text and class names. Real hosts bridge this
//! trait to their actual document; [`MemoryDom`] is an arena-backed reference
//! implementation used by the test suite and by headless hosts.

use std::fmt;

/// Minimal element-tree capability the widget renders into.
///
/// Handles are plain copyable values; the tree owns the nodes. A handle stays
/// valid for the life of the tree even when its node is detached, which is
/// what lets the widget keep per-unit elements alive across re-renders.
pub trait Dom {
    /// Opaque element handle.
    type Element: Copy + Eq + fmt::Debug;

    /// Resolves a selector to an element.
    ///
    /// Returns `None` when nothing matches. Implementations must not fail on
    /// malformed selectors; a selector that cannot be interpreted simply
    /// matches nothing.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Creates a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> Self::Element;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Element, child: Self::Element);

    /// Detaches every child of `parent`.
    fn clear_children(&mut self, parent: Self::Element);

    /// Replaces the element's own text.
    fn set_text(&mut self, element: Self::Element, text: &str);

    /// Replaces the element's class name.
    fn set_class(&mut self, element: Self::Element, class: &str);
}

/// Handle into a [`MemoryDom`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    id_attr: Option<String>,
    class: Option<String>,
    text: String,
    children: Vec<ElementId>,
}

/// In-memory element tree.
///
/// Supports the selector forms the widget needs: `.class`, `#id`, and a bare
/// tag name, each resolving to the first matching element in creation order.
///
/// # Examples
///
/// ```rust
/// use domclock::dom::{Dom, MemoryDom};
///
/// let mut dom = MemoryDom::new();
/// let div = dom.create_element("div");
/// dom.set_class(div, "clock face");
///
/// assert_eq!(dom.query_selector(".clock"), Some(div));
/// assert_eq!(dom.query_selector("div"), Some(div));
/// assert_eq!(dom.query_selector(".missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    nodes: Vec<Node>,
}

impl MemoryDom {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element's `id` attribute, matched by `#name` selectors.
    pub fn set_id(&mut self, element: ElementId, id: &str) {
        self.nodes[element.0].id_attr = Some(id.to_string());
    }

    /// The element's own text.
    pub fn text(&self, element: ElementId) -> &str {
        &self.nodes[element.0].text
    }

    /// The element's class name, if one was assigned.
    pub fn class(&self, element: ElementId) -> Option<&str> {
        self.nodes[element.0].class.as_deref()
    }

    /// The element's tag.
    pub fn tag(&self, element: ElementId) -> &str {
        &self.nodes[element.0].tag
    }

    /// The element's children, in document order.
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        &self.nodes[element.0].children
    }

    /// The element's own text followed by the text of all descendants, in
    /// document order. This is what a reader of the rendered face sees.
    pub fn text_content(&self, element: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(element, &mut out);
        out
    }

    fn collect_text(&self, element: ElementId, out: &mut String) {
        let node = &self.nodes[element.0];
        out.push_str(&node.text);
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    fn class_matches(node: &Node, wanted: &str) -> bool {
        node.class
            .as_deref()
            .is_some_and(|class| class.split_whitespace().any(|c| c == wanted))
    }
}

impl Dom for MemoryDom {
    type Element = ElementId;

    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let position = if let Some(class) = selector.strip_prefix('.') {
            if class.is_empty() {
                return None;
            }
            self.nodes
                .iter()
                .position(|node| Self::class_matches(node, class))
        } else if let Some(id) = selector.strip_prefix('#') {
            if id.is_empty() {
                return None;
            }
            self.nodes
                .iter()
                .position(|node| node.id_attr.as_deref() == Some(id))
        } else if selector.is_empty() {
            return None;
        } else {
            self.nodes.iter().position(|node| node.tag == selector)
        };
        position.map(ElementId)
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.nodes[parent.0].children.push(child);
    }

    fn clear_children(&mut self, parent: ElementId) {
        self.nodes[parent.0].children.clear();
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.nodes[element.0].text = text.to_string();
    }

    fn set_class(&mut self, element: ElementId, class: &str) {
        self.nodes[element.0].class = Some(class.to_string());
    }
}
