/// Index of a node in a [`Stylesheet`] arena.
///
/// Ids are never reused: a removed node keeps its slot, detached from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Rule {
        selector: String,
    },
    AtRule {
        name: String,
        params: String,
        has_block: bool,
    },
    Declaration {
        property: String,
        value: String,
        important: bool,
    },
    Comment {
        text: String,
    },
}

impl NodeKind {
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment { text: text.into() }
    }

    pub fn declaration(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Declaration {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed stylesheet tree.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    nodes: Vec<Node>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Stylesheet {
    /// An empty stylesheet holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    #[must_use]
    pub fn is_rule(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Rule { .. }))
    }

    /// Selector text of a style rule.
    #[must_use]
    pub fn selector(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Rule { selector }) => Some(selector.as_str()),
            _ => None,
        }
    }

    /// Raw parameter text of an at-rule.
    #[must_use]
    pub fn params(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::AtRule { params, .. }) => Some(params.as_str()),
            _ => None,
        }
    }

    /// Whether `id` is still reachable from the root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root() {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// All attached nodes below the root, in document order.
    #[must_use]
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(self.root()).iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }

        out
    }

    /// At-rules named `name` (case-insensitive), in document order.
    #[must_use]
    pub fn walk_at_rules(&self, name: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| {
                matches!(self.kind(id), Some(NodeKind::AtRule { name: n, .. }) if n.eq_ignore_ascii_case(name))
            })
            .collect()
    }

    /// Style rules, in document order.
    #[must_use]
    pub fn walk_rules(&self) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| self.is_rule(id))
            .collect()
    }

    /// Declarations that are direct children of `id`, as `(property, value)`.
    #[must_use]
    pub fn declarations(&self, id: NodeId) -> Vec<(&str, &str)> {
        self.children(id)
            .iter()
            .filter_map(|&child| match self.kind(child) {
                Some(NodeKind::Declaration {
                    property, value, ..
                }) => Some((property.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    fn alloc(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Appends a new last child to `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.alloc(kind, Some(parent));
        if let Some(node) = self.node_mut(parent) {
            node.children.push(id);
        }
        id
    }

    pub fn append_declaration(&mut self, rule: NodeId, property: &str, value: &str) -> NodeId {
        self.append(rule, NodeKind::declaration(property, value))
    }

    /// Inserts a new sibling directly before `target`.
    ///
    /// Returns `None` when `target` is detached or is the root.
    pub fn insert_before(&mut self, target: NodeId, kind: NodeKind) -> Option<NodeId> {
        let parent = self.parent(target)?;
        let position = self.children(parent).iter().position(|&c| c == target)?;

        let id = self.alloc(kind, Some(parent));
        if let Some(node) = self.node_mut(parent) {
            node.children.insert(position, id);
        }
        Some(id)
    }

    pub fn insert_comment_before(&mut self, target: NodeId, text: &str) -> Option<NodeId> {
        self.insert_before(target, NodeKind::comment(text))
    }

    /// Detaches `id` (and its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Serializes the tree back to CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}
