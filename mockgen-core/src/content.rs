//! Hierarchical document content.
//!
//! A generated document is built bottom-up as a tree of [`Content`] nodes
//! rather than one contiguous string. Leaves hold text fragments; groups hold
//! ordered children joined by an optional separator and closed by an optional
//! footer. The tree is only flattened when it is walked, either by the
//! streaming writer or by [`Display`](fmt::Display).

use std::{borrow::Cow, convert::Infallible, fmt};

/// A node of generated document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A text fragment, written verbatim.
    Leaf(Cow<'static, str>),
    /// An ordered collection of nodes.
    Group(Group),
}

/// Ordered children joined by a separator and followed by a footer.
///
/// Empty children are dropped on insertion, so the separator only ever
/// appears between two nodes that produce output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    children: Vec<Content>,
    separator: Option<Cow<'static, str>>,
    footer: Option<Cow<'static, str>>,
}

impl Content {
    /// Create a leaf holding `text` verbatim.
    pub fn leaf(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Leaf(text.into())
    }

    /// Create a group from `children`. Empty children are elided.
    pub fn group(children: impl IntoIterator<Item = Content>) -> Group {
        Group::new(children)
    }

    /// A node that produces no output.
    pub fn empty() -> Self {
        Self::Group(Group::default())
    }

    /// Whether this node produces no output at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Leaf(text) => text.is_empty(),
            Content::Group(group) => group.is_empty(),
        }
    }

    /// Number of bytes this node serializes to.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let Ok(()) = self.walk(&mut |text: &str| {
            len += text.len();
            Ok::<_, Infallible>(())
        });
        len
    }

    /// Visit every non-empty text fragment depth-first, in output order.
    ///
    /// Stops at the first error returned by `visit`.
    pub fn walk<E, F>(&self, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        match self {
            Content::Leaf(text) if text.is_empty() => Ok(()),
            Content::Leaf(text) => visit(text),
            Content::Group(group) => group.walk(visit),
        }
    }
}

impl Group {
    /// Create a group with no separator and no footer.
    pub fn new(children: impl IntoIterator<Item = Content>) -> Self {
        let mut group = Self::default();
        group.extend(children);
        group
    }

    /// Set the string written between consecutive children.
    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the string written once after all children.
    pub fn footer(mut self, footer: impl Into<Cow<'static, str>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Append a child, unless it is empty.
    pub fn push(&mut self, child: Content) {
        if !child.is_empty() {
            self.children.push(child);
        }
    }

    /// The non-empty children, in order.
    pub fn children(&self) -> &[Content] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.footer.as_deref().is_none_or(str::is_empty)
    }

    fn walk<E, F>(&self, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                if let Some(separator) = self.separator.as_deref().filter(|s| !s.is_empty()) {
                    visit(separator)?;
                }
            }
            child.walk(visit)?;
        }
        match self.footer.as_deref() {
            Some(footer) if !footer.is_empty() => visit(footer),
            _ => Ok(()),
        }
    }
}

impl Extend<Content> for Group {
    fn extend<I: IntoIterator<Item = Content>>(&mut self, iter: I) {
        for child in iter {
            self.push(child);
        }
    }
}

impl FromIterator<Content> for Group {
    fn from_iter<I: IntoIterator<Item = Content>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Group> for Content {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<&'static str> for Content {
    fn from(text: &'static str) -> Self {
        Self::leaf(text)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::leaf(text)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.walk(&mut |text: &str| f.write_str(text))
    }
}
