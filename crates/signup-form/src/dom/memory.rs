//! In-memory document
//!
//! A small element tree that implements [`Document`] without a browser.
//! Supports compound simple selectors (`form`, `#email`, `.error`,
//! `form#signup.wide`), class lists, input values, element text, submit
//! listeners and a count of native submissions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dom::{Document, SubmitEvent, SubmitListener};

/// Handle to an element in a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    value: String,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Default)]
struct Tree {
    nodes: Vec<Node>,
    listeners: Vec<(NodeId, Rc<dyn Fn(&MemoryEvent)>)>,
    submissions: usize,
}

/// Submit event dispatched by [`MemoryDocument::dispatch_submit`]
#[derive(Debug, Default)]
pub struct MemoryEvent {
    default_prevented: Cell<bool>,
}

impl MemoryEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl SubmitEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// In-memory document backend
///
/// Cloning yields another handle to the same tree.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        NodeId(tree.nodes.len() - 1)
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        let mut tree = self.tree.borrow_mut();
        if let Some(old_parent) = tree.nodes[child.0].parent.take() {
            tree.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        tree.nodes[child.0].parent = Some(parent);
        tree.nodes[parent.0].children.push(child);
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        self.tree.borrow_mut().nodes[node.0].id = Some(id.to_string());
    }

    pub fn add_class(&self, node: NodeId, class: &str) {
        self.toggle_class(&node, class, true);
    }

    /// Set an input's value, as if the user had typed it
    pub fn set_value(&self, node: NodeId, value: &str) {
        self.tree.borrow_mut().nodes[node.0].value = value.to_string();
    }

    pub fn text(&self, node: NodeId) -> String {
        self.tree.borrow().nodes[node.0].text.clone()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.tree.borrow().nodes[node.0].classes.clone()
    }

    /// First element in document order with the given id
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&format!("#{}", id))
    }

    /// First element in document order matching `selector`
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        let selector = SimpleSelector::parse(selector)?;
        let tree = self.tree.borrow();
        let roots = (0..tree.nodes.len())
            .map(NodeId)
            .filter(|&n| tree.nodes[n.0].parent.is_none());

        for root in roots {
            if let Some(found) = find_in_subtree(&tree, root, &selector, true) {
                return Some(found);
            }
        }
        None
    }

    /// Number of submit listeners registered on `form`
    pub fn listener_count(&self, form: NodeId) -> usize {
        self.tree
            .borrow()
            .listeners
            .iter()
            .filter(|(target, _)| *target == form)
            .count()
    }

    /// Simulate the user submitting `form`
    ///
    /// Runs every submit listener in registration order. Unless one of them
    /// prevents the default action, the form is natively submitted. Returns
    /// the dispatched event.
    pub fn dispatch_submit(&self, form: NodeId) -> MemoryEvent {
        // Listeners re-enter the document, so no borrow is held while they run.
        let listeners: Vec<_> = self
            .tree
            .borrow()
            .listeners
            .iter()
            .filter(|(target, _)| *target == form)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        let event = MemoryEvent::new();
        for listener in listeners {
            listener(&event);
        }

        if !event.default_prevented() {
            self.submit(&form);
        }
        event
    }

    /// Number of native submissions so far
    pub fn submission_count(&self) -> usize {
        self.tree.borrow().submissions
    }
}

impl Document for MemoryDocument {
    type Form = NodeId;
    type Element = NodeId;
    type Event = MemoryEvent;

    fn query_form(&self, selector: &str) -> Option<NodeId> {
        self.query(selector)
    }

    fn field_in_form(&self, form: &NodeId, id: &str) -> Option<NodeId> {
        self.query_within(form, &format!("#{}", id))
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.tree.borrow().nodes[element.0].parent
    }

    fn query_within(&self, container: &NodeId, selector: &str) -> Option<NodeId> {
        let selector = SimpleSelector::parse(selector)?;
        find_in_subtree(&self.tree.borrow(), *container, &selector, false)
    }

    fn value(&self, input: &NodeId) -> String {
        self.tree.borrow().nodes[input.0].value.clone()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.tree.borrow_mut().nodes[element.0].text = text.to_string();
    }

    fn toggle_class(&self, element: &NodeId, class: &str, force: bool) {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.nodes[element.0].classes;
        let present = classes.iter().any(|c| c == class);
        if force && !present {
            classes.push(class.to_string());
        } else if !force && present {
            classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.tree.borrow().nodes[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_submit_listener(&self, form: &NodeId, listener: SubmitListener<MemoryEvent>) {
        self.tree
            .borrow_mut()
            .listeners
            .push((*form, Rc::from(listener)));
    }

    fn submit(&self, _form: &NodeId) {
        self.tree.borrow_mut().submissions += 1;
    }
}

/// Depth-first, document-order search below (and optionally including) `start`
fn find_in_subtree(
    tree: &Tree,
    start: NodeId,
    selector: &SimpleSelector,
    include_start: bool,
) -> Option<NodeId> {
    if include_start && selector.matches(&tree.nodes[start.0]) {
        return Some(start);
    }
    for &child in &tree.nodes[start.0].children {
        if let Some(found) = find_in_subtree(tree, child, selector, true) {
            return Some(found);
        }
    }
    None
}

/// `tag`, `#id` and `.class` parts of a single compound selector
#[derive(Debug, Default, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() || selector.contains(char::is_whitespace) {
            return None;
        }

        let mut parsed = SimpleSelector::default();
        let mut rest = selector;

        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            parsed.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '#' => parsed.id = Some(name.to_string()),
                _ => parsed.classes.push(name.to_string()),
            }
            rest = &body[end..];
        }

        Some(parsed)
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if &node.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|class| node.classes.iter().any(|c| c == class))
    }
}
