mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element with the given tag, depth-first, including `root`.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Option<&'a Element> {
    if root.tag == tag {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_tag(child, tag) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element with the given tag in document order.
pub fn find_all_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: &str, out: &mut Vec<&'a Element>) {
    if element.tag == tag {
        out.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_tag(child, tag, out);
        }
    }
}
