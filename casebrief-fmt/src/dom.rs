//! HTML fragment handling on top of `html5ever` + `markup5ever_rcdom`
//!
//! The page host needs a small subset of what a browser DOM offers: parse a page, find an
//! element by class, read and assign its inner HTML, and move list items between sibling
//! lists. Fragments are parsed with the element they are assigned to as context, the way an
//! `innerHTML` assignment does, so a `<table>` container keeps its rows and a `<div>` keeps
//! leading whitespace.

use crate::error::FormatError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope,
    Attribute, LocalName, ParseOpts, QualName,
};
use html5ever::driver;
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// Parse a complete HTML page.
pub fn parse_page(source: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(source)
}

/// Serialize a parsed page back to HTML.
pub fn serialize_page(dom: &RcDom) -> Result<String, FormatError> {
    serialize_children(&dom.document)
}

/// Parse an HTML fragment as it would be parsed inside `context`.
///
/// Non-element contexts fall back to `<body>`. The returned nodes are detached and can be
/// appended anywhere.
pub fn parse_fragment(html: &str, context: &Handle) -> Vec<Handle> {
    let (name, attrs) = match &context.data {
        NodeData::Element { name, attrs, .. } => (name.clone(), attrs.borrow().clone()),
        _ => (
            QualName::new(None, ns!(html), LocalName::from("body")),
            Vec::new(),
        ),
    };
    let dom = driver::parse_fragment(RcDom::default(), ParseOpts::default(), name, attrs, false)
        .one(html);

    // Fragment nodes land under a synthetic <html> root.
    let Some(root) = dom.document.children.borrow().first().cloned() else {
        return Vec::new();
    };
    let children = root.children.take();
    for child in &children {
        child.parent.set(None);
    }
    children
}

/// Serialize the children of `node`, i.e. its inner HTML.
pub fn inner_html(node: &Handle) -> Result<String, FormatError> {
    serialize_children(node)
}

/// Replace the children of `node` with the parsed `html`.
pub fn set_inner_html(node: &Handle, html: &str) {
    for child in node.children.take() {
        child.parent.set(None);
    }
    for child in parse_fragment(html, node) {
        append_child(node, child);
    }
}

/// Depth-first, document-order search for the first node matching `predicate`.
pub fn find_first(node: &Handle, predicate: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    if predicate(node) {
        return Some(node.clone());
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_first(child, predicate))
}

/// Whether `node` is an element with the given local name.
pub fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

/// Whether `node` is an element whose `class` attribute lists `class`.
pub fn has_class(node: &Handle, class: &str) -> bool {
    let NodeData::Element { attrs, .. } = &node.data else {
        return false;
    };
    attrs
        .borrow()
        .iter()
        .filter(|attr| &*attr.name.local == "class")
        .any(|attr| attr.value.split_whitespace().any(|token| token == class))
}

/// Merge every `<ol>` into the `<ol>` right before it.
///
/// Two lists are adjacent when only whitespace text sits between them. The items of the
/// second list are appended to the first, in order, and the second list is detached.
/// Runs of any length collapse into one list. Nested lists are handled too. Every other
/// node is left alone.
///
/// Returns how many list containers were removed.
pub fn merge_adjacent_lists(node: &Handle) -> usize {
    let mut removed = 0;
    let mut index = 0;

    while index < node.children.borrow().len() {
        let current = node.children.borrow()[index].clone();
        if !is_element(&current, "ol") {
            index += 1;
            continue;
        }

        let Some(next_index) = next_list_sibling(node, index) else {
            index += 1;
            continue;
        };

        let absorbed = node.children.borrow_mut().remove(next_index);
        absorbed.parent.set(None);
        for item in absorbed.children.take() {
            if is_element(&item, "li") {
                append_child(&current, item);
            }
        }
        removed += 1;
        // Stay on `current`: the node after the absorbed list may be a list as well.
    }

    let children: Vec<Handle> = node.children.borrow().clone();
    for child in &children {
        removed += merge_adjacent_lists(child);
    }

    if removed > 0 {
        debug!(removed, "merged adjacent list containers");
    }
    removed
}

/// Create a detached element, e.g. to host a fragment.
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn next_list_sibling(parent: &Handle, index: usize) -> Option<usize> {
    let children = parent.children.borrow();
    children
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, child)| !is_whitespace_text(child))
        .filter(|(_, child)| is_element(child, "ol"))
        .map(|(position, _)| position)
}

fn is_whitespace_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().chars().all(char::is_whitespace),
        _ => false,
    }
}

fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

fn serialize_children(node: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut output, &SerializableHandle::from(node.clone()), opts)?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}
