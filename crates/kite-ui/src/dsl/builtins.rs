use kite_kml::Node;

use super::builder::{BuildCtx, DslLoader};
use super::error::BuildError;
use super::props;
use crate::painter::VisualContent;
use crate::widget::Element;
use crate::widgets::container::Container;
use crate::widgets::diamond::Diamond;
use crate::widgets::flex::{Align, Axis, Flex};
use crate::widgets::polygon::Polygon;
use crate::widgets::triangle::Triangle;

pub(super) fn register(loader: &mut DslLoader) {
    loader
        .register_widget("Column", |node, ctx| build_flex(Axis::Vertical, node, ctx))
        .register_widget("Row", |node, ctx| build_flex(Axis::Horizontal, node, ctx))
        .register_widget("Container", build_container)
        .register_widget("Diamond", build_diamond)
        .register_widget("Triangle", build_triangle);
}

const PADDING_KEYS: [&str; 5] =
    ["padding", "padding_top", "padding_right", "padding_bottom", "padding_left"];

fn known_with_padding(keys: &[&'static str]) -> Vec<&'static str> {
    keys.iter().copied().chain(PADDING_KEYS).collect()
}

fn warn_ignored_children(node: &Node) {
    if !node.children.is_empty() {
        log::warn!(
            "{}:{}: `{}` takes no children; {} ignored",
            node.line,
            node.col,
            node.widget,
            node.children.len()
        );
    }
}

// ── Column / Row ──────────────────────────────────────────────────────────

fn build_flex(axis: Axis, node: &Node, ctx: &BuildCtx<'_>) -> Result<Element, BuildError> {
    props::warn_unknown(node, &known_with_padding(&["gap", "align", "bg"]));

    let mut flex = Flex::new(axis).align(parse_align(node)?);
    if let Some(v) = props::extent(node, "gap")? {
        flex = flex.gap(v);
    }
    if let Some(edges) = props::edges(node)? {
        flex = flex.padding(edges);
    }
    flex = flex.children(ctx.build_children(node)?);

    // Flex has no background of its own.
    Ok(match props::color(node, "bg")? {
        Some(bg) => Container::new().background(bg).child(flex).into(),
        None => flex.into(),
    })
}

fn parse_align(node: &Node) -> Result<Align, BuildError> {
    Ok(match props::ident(node, "align")? {
        None | Some("stretch") => Align::Stretch,
        Some("start") => Align::Start,
        Some("center") => Align::Center,
        Some("end") => Align::End,
        Some(other) => {
            return Err(props::value_error(
                node,
                "align",
                format!("expected start, center, end or stretch, got `{other}`"),
            ));
        }
    })
}

// ── Container ─────────────────────────────────────────────────────────────

fn build_container(node: &Node, ctx: &BuildCtx<'_>) -> Result<Element, BuildError> {
    props::warn_unknown(node, &known_with_padding(&["bg", "min_width", "min_height", "clip"]));

    let mut c = Container::new();
    if let Some(edges) = props::edges(node)? {
        c = c.padding(edges);
    }
    if let Some(bg) = props::color(node, "bg")? {
        c = c.background(bg);
    }
    let min_w = props::extent(node, "min_width")?;
    let min_h = props::extent(node, "min_height")?;
    if min_w.or(min_h).is_some() {
        c = c.min_size(min_w.unwrap_or(0.0), min_h.unwrap_or(0.0));
    }
    if let Some(clip) = props::flag(node, "clip")? {
        c = c.clip(clip);
    }

    match node.children.as_slice() {
        [] => {}
        [child] => c = c.child(ctx.build_child(child)?),
        [_, extra, ..] => {
            return Err(BuildError::PropValue {
                widget: node.widget.clone(),
                key: extra.widget.clone(),
                message: format!("takes one child, got {}", node.children.len()),
                line: extra.line,
                col: extra.col,
            });
        }
    }
    Ok(c.into())
}

// ── Shapes ────────────────────────────────────────────────────────────────

fn sized<S: VisualContent + 'static>(
    shape: S,
    node: &Node,
) -> Result<Polygon<S>, BuildError> {
    let mut p = Polygon::new(shape);
    if let Some(w) = props::extent(node, "width")? {
        p = p.width(w);
    }
    if let Some(h) = props::extent(node, "height")? {
        p = p.height(h);
    }
    Ok(p)
}

fn build_diamond(node: &Node, _ctx: &BuildCtx<'_>) -> Result<Element, BuildError> {
    props::warn_unknown(node, &["width", "height", "tints"]);
    warn_ignored_children(node);

    let diamond = match props::colors(node, "tints")? {
        None => Diamond::new(),
        Some(tints) => {
            let tints: [_; 4] = tints.try_into().map_err(|t: Vec<_>| {
                props::value_error(node, "tints", format!("needs exactly 4 colors, got {}", t.len()))
            })?;
            Diamond::with_tints(tints)
        }
    };
    Ok(sized(diamond, node)?.into())
}

fn build_triangle(node: &Node, _ctx: &BuildCtx<'_>) -> Result<Element, BuildError> {
    props::warn_unknown(node, &["width", "height", "tint"]);
    warn_ignored_children(node);

    let tint = props::color(node, "tint")?.unwrap_or(Triangle::DEFAULT_TINT);
    Ok(sized(Triangle::with_tint(tint), node)?.into())
}
