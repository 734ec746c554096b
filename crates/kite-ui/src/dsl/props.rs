//! Typed property readers for widget factories.
//!
//! Every reader returns `Ok(None)` for an absent key and a
//! [`BuildError::PropType`] when the key holds the wrong kind of value.

use kite_engine::paint::Color;
use kite_kml::ast::Prop;
use kite_kml::{Node, Value};

use super::error::BuildError;
use crate::constraints::Edges;

fn type_error(node: &Node, prop: &Prop, expected: &'static str, found: &Value) -> BuildError {
    BuildError::PropType {
        widget: node.widget.clone(),
        key: prop.key.clone(),
        expected,
        found: found.kind(),
        line: prop.line,
        col: prop.col,
    }
}

/// A [`BuildError::PropValue`] positioned at `key` (or at the node when the
/// key is absent).
pub fn value_error(node: &Node, key: &str, message: impl Into<String>) -> BuildError {
    let (line, col) = node.find_prop(key).map_or((node.line, node.col), |p| (p.line, p.col));
    BuildError::PropValue {
        widget: node.widget.clone(),
        key: key.to_string(),
        message: message.into(),
        line,
        col,
    }
}

pub fn number(node: &Node, key: &str) -> Result<Option<f32>, BuildError> {
    let Some(prop) = node.find_prop(key) else { return Ok(None) };
    match &prop.value {
        Value::Number(v) => Ok(Some(*v)),
        other => Err(type_error(node, prop, "number", other)),
    }
}

/// Non-negative finite number.
pub fn extent(node: &Node, key: &str) -> Result<Option<f32>, BuildError> {
    match number(node, key)? {
        Some(v) if !v.is_finite() || v < 0.0 => {
            Err(value_error(node, key, format!("must be a non-negative size, got {v}")))
        }
        other => Ok(other),
    }
}

pub fn color(node: &Node, key: &str) -> Result<Option<Color>, BuildError> {
    let Some(prop) = node.find_prop(key) else { return Ok(None) };
    match &prop.value {
        Value::Color(c) => Ok(Some(Color::from_array(*c))),
        other => Err(type_error(node, prop, "color", other)),
    }
}

/// A list in which every element is a color.
pub fn colors(node: &Node, key: &str) -> Result<Option<Vec<Color>>, BuildError> {
    let Some(prop) = node.find_prop(key) else { return Ok(None) };
    let Value::List(items) = &prop.value else {
        return Err(type_error(node, prop, "list", &prop.value));
    };
    items
        .iter()
        .map(|v| match v {
            Value::Color(c) => Ok(Color::from_array(*c)),
            other => Err(type_error(node, prop, "color", other)),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Identifier or string.
pub fn ident<'n>(node: &'n Node, key: &str) -> Result<Option<&'n str>, BuildError> {
    let Some(prop) = node.find_prop(key) else { return Ok(None) };
    match &prop.value {
        Value::Ident(s) | Value::Str(s) => Ok(Some(s.as_str())),
        other => Err(type_error(node, prop, "identifier", other)),
    }
}

/// `true` / `false` identifiers.
pub fn flag(node: &Node, key: &str) -> Result<Option<bool>, BuildError> {
    match ident(node, key)? {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(value_error(node, key, format!("expected true or false, got `{other}`"))),
    }
}

/// `padding` (all sides) overridden per side by `padding_top`,
/// `padding_right`, `padding_bottom`, `padding_left`.
pub fn edges(node: &Node) -> Result<Option<Edges>, BuildError> {
    let all = extent(node, "padding")?;
    let top = extent(node, "padding_top")?;
    let right = extent(node, "padding_right")?;
    let bottom = extent(node, "padding_bottom")?;
    let left = extent(node, "padding_left")?;

    if all.or(top).or(right).or(bottom).or(left).is_none() {
        return Ok(None);
    }
    let base = all.unwrap_or(0.0);
    Ok(Some(Edges {
        top: top.unwrap_or(base),
        right: right.unwrap_or(base),
        bottom: bottom.unwrap_or(base),
        left: left.unwrap_or(base),
    }))
}

/// Warns about properties outside `known`; they are otherwise ignored.
pub fn warn_unknown(node: &Node, known: &[&str]) {
    for prop in node.props.iter().filter(|p| !known.contains(&p.key.as_str())) {
        log::warn!(
            "{}:{}: `{}` has no property `{}`; ignored",
            prop.line,
            prop.col,
            node.widget,
            prop.key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_kml::parse_str;

    fn node(src: &str) -> Node {
        parse_str(src).unwrap().root
    }

    #[test]
    fn absent_is_none() {
        let n = node("Diamond");
        assert_eq!(number(&n, "width"), Ok(None));
        assert_eq!(color(&n, "tint"), Ok(None));
        assert_eq!(edges(&n), Ok(None));
    }

    #[test]
    fn wrong_kind_reports_position() {
        let n = node("Diamond {\n  width: \"wide\"\n}");
        let Err(BuildError::PropType { expected, found, line, col, .. }) = number(&n, "width") else {
            panic!("expected a type error");
        };
        assert_eq!((expected, found, line, col), ("number", "string", 2, 3));
    }

    #[test]
    fn negative_extent_rejected() {
        let n = node("Diamond { width: -3 }");
        assert!(matches!(extent(&n, "width"), Err(BuildError::PropValue { .. })));
    }

    #[test]
    fn color_list_elements_checked() {
        let n = node("Diamond { tints: [#ff0000, 4] }");
        assert!(matches!(colors(&n, "tints"), Err(BuildError::PropType { expected: "color", .. })));

        let n = node("Diamond { tints: [#ff0000, #00ff0080] }");
        assert_eq!(colors(&n, "tints"), Ok(Some(vec![Color::RED, Color::rgba(0, 255, 0, 128)])));
    }

    #[test]
    fn per_side_padding_overrides_all() {
        let n = node("Container { padding: 4  padding_left: 10 }");
        assert_eq!(edges(&n), Ok(Some(Edges { top: 4.0, right: 4.0, bottom: 4.0, left: 10.0 })));
    }

    #[test]
    fn flags() {
        assert_eq!(flag(&node("Container { clip: true }"), "clip"), Ok(Some(true)));
        assert!(flag(&node("Container { clip: maybe }"), "clip").is_err());
    }
}
