use super::{Attributes, StructureError};

/// A node in the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Holds text directly. Without a tag it renders as raw text.
    Leaf {
        tag: Option<String>,
        text: String,
        attributes: Attributes,
    },
    /// Holds only child nodes.
    ///
    /// May be built with an empty tag or no children; such a container
    /// fails when rendered.
    Container {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// An untagged leaf: raw text with no wrapping element.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Container {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute, returning the node for chaining.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(name, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Container { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => attributes,
        }
    }

    /// Children of a container; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Container { children, .. } => children,
        }
    }

    /// Serializes the tree to HTML.
    ///
    /// Fails on the first container (depth-first) that has no tag or no
    /// children. A leaf never fails.
    pub fn render(&self) -> Result<String, StructureError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), StructureError> {
        match self {
            Node::Leaf {
                tag: None, text, ..
            } => out.push_str(text),
            Node::Leaf {
                tag: Some(tag),
                text,
                attributes,
            } => {
                open_tag(out, tag, attributes);
                out.push_str(text);
                close_tag(out, tag);
            }
            Node::Container {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(StructureError::MissingTag);
                }
                if children.is_empty() {
                    return Err(StructureError::NoChildren { tag: tag.clone() });
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.render_into(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
