//! Generic document tree for catalog input.
//!
//! A catalog value can be a scalar, an array or a nested table depending on
//! how the author wrote it. [`Node`] captures those shapes so the parser can
//! pattern-match instead of probing types at runtime. Tables keep their
//! declaration order.

use toml_edit::{DocumentMut, Item, Table, Value};

/// A node of a parsed catalog document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Str(String),
    Bool(bool),
    /// Integers, floats and datetimes, kept as their literal TOML text.
    Literal(String),
    Array(Vec<Node>),
    Table(Vec<(String, Node)>),
}

impl Node {
    /// Look up a key when this node is a table.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Table(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Text of any scalar that is not a boolean.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Str(s) | Node::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Table(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Node::Table(_))
    }
}

/// Parse TOML text into a document tree rooted at a table node.
pub fn parse(text: &str) -> Result<Node, toml_edit::TomlError> {
    let doc: DocumentMut = text.parse()?;
    Ok(from_table(doc.as_table()))
}

fn from_table(table: &Table) -> Node {
    Node::Table(
        table
            .iter()
            .filter_map(|(key, item)| from_item(item).map(|node| (key.to_string(), node)))
            .collect(),
    )
}

fn from_item(item: &Item) -> Option<Node> {
    match item {
        Item::None => None,
        Item::Value(value) => Some(from_value(value)),
        Item::Table(table) => Some(from_table(table)),
        Item::ArrayOfTables(tables) => Some(Node::Array(tables.iter().map(from_table).collect())),
    }
}

fn from_value(value: &Value) -> Node {
    match value {
        Value::String(s) => Node::Str(s.value().clone()),
        Value::Boolean(b) => Node::Bool(*b.value()),
        Value::Integer(i) => Node::Literal(i.display_repr().into_owned()),
        Value::Float(f) => Node::Literal(f.display_repr().into_owned()),
        Value::Datetime(d) => Node::Literal(d.display_repr().into_owned()),
        Value::Array(items) => Node::Array(items.iter().map(from_value).collect()),
        Value::InlineTable(table) => Node::Table(
            table
                .iter()
                .map(|(key, value)| (key.to_string(), from_value(value)))
                .collect(),
        ),
    }
}
