// ── Value ─────────────────────────────────────────────────────────────────

/// A literal property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"hello"`
    Str(String),
    /// Number literal: `16`, `-2.5`
    Number(f32),
    /// Color literal `#rrggbb` / `#rrggbbaa`, as straight-alpha bytes.
    Color([u8; 4]),
    /// Bare identifier: enum variants, names, `true` / `false`.
    Ident(String),
    /// Bracketed list: `[#ff0000, #00ff00]`
    List(Vec<Value>),
}

impl Value {
    /// Human-readable kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
            Value::List(_) => "list",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// `key: value` inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    pub line: usize,
    pub col: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// One widget instantiation.
///
/// ```kml
/// Diamond { width: 100  height: 50 }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Registered widget name or component alias.
    pub widget: String,
    pub props: Vec<Prop>,
    pub children: Vec<Node>,
    /// Position of the widget name.
    pub line: usize,
    pub col: usize,
}

impl Node {
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.find_prop(key).map(|p| &p.value)
    }

    pub fn find_prop(&self, key: &str) -> Option<&Prop> {
        self.props.iter().find(|p| p.key == key)
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// `import "path.kml" as Alias`
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: String,
    pub alias: String,
}

/// Parse result of one `.kml` source: leading imports plus a single root node.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub imports: Vec<Import>,
    pub root: Node,
}

impl Document {
    /// Depth-first walk over every node, root first.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
