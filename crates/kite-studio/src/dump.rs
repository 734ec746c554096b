use serde_json::{json, Value};

use kite_engine::coords::{Rect, Vec2};
use kite_engine::scene::{DrawCmd, DrawItem, DrawList};

fn rect_json(r: Rect) -> Value {
    json!({ "x": r.origin.x, "y": r.origin.y, "w": r.width(), "h": r.height() })
}

/// One frame as JSON: viewport plus every draw item in paint order, with
/// mesh items expanded to their vertices and buffer-global indices.
pub fn frame_json(viewport: Vec2, list: &mut DrawList) -> Value {
    let items: Vec<DrawItem> = list.iter_in_paint_order().cloned().collect();
    let mesh = list.mesh();

    let items: Vec<Value> = items
        .iter()
        .map(|item| {
            let mut v = match &item.cmd {
                DrawCmd::Rect(cmd) => json!({
                    "kind": "rect",
                    "rect": rect_json(cmd.rect),
                    "color": cmd.color.to_hex(),
                }),
                DrawCmd::Mesh(cmd) => json!({
                    "kind": "mesh",
                    "vertices": mesh
                        .slice_vertices(&cmd.slice)
                        .iter()
                        .map(|v| json!({ "pos": v.position, "tint": v.tint.to_hex() }))
                        .collect::<Vec<_>>(),
                    "indices": mesh.slice_indices(&cmd.slice),
                }),
            };
            v["z"] = json!(item.key.z.0);
            if let Some(clip) = item.clip_rect {
                v["clip"] = rect_json(clip);
            }
            v
        })
        .collect();

    json!({
        "viewport": { "w": viewport.x, "h": viewport.y },
        "items": items,
    })
}

/// `320x200: 3 items, 7 vertices (112 B), 9 indices (36 B)`
pub fn frame_summary(viewport: Vec2, list: &DrawList) -> String {
    let mesh = list.mesh();
    format!(
        "{}x{}: {} items, {} vertices ({} B), {} indices ({} B)",
        viewport.x,
        viewport.y,
        list.items().len(),
        mesh.vertices().len(),
        mesh.vertex_bytes().len(),
        mesh.indices().len(),
        mesh.index_bytes().len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_ui::prelude::*;

    fn frame(root: impl Into<Element>, w: f32, h: f32) -> (Value, String) {
        let mut ui = UiScene::new();
        let mut root = root.into();
        let list = ui.frame(&mut root, Vec2::new(w, h));
        let summary = frame_summary(Vec2::new(w, h), list);
        (frame_json(Vec2::new(w, h), list), summary)
    }

    #[test]
    fn triangle_frame() {
        let (json, summary) = frame(Polygon::new(Triangle::new()), 100.0, 50.0);
        let item = &json["items"][0];
        assert_eq!(item["kind"], "mesh");
        assert_eq!(item["z"], 0);
        assert_eq!(item["indices"], json!([0, 1, 2]));
        assert_eq!(item["vertices"][1]["pos"], json!([50.0, 0.0, -1.0]));
        assert_eq!(item["vertices"][1]["tint"], "#ff0000ff");
        assert_eq!(summary, "100x50: 1 items, 3 vertices (48 B), 3 indices (12 B)");
    }

    #[test]
    fn background_and_clip_are_reported() {
        let root = Container::new()
            .background(Color::BLACK)
            .clip(true)
            .child(Polygon::new(Diamond::new()));
        let (json, _) = frame(root, 10.0, 10.0);
        assert_eq!(json["items"][0]["kind"], "rect");
        assert!(json["items"][0].get("clip").is_none());
        assert_eq!(json["items"][1]["clip"]["w"], 10.0);
        assert_eq!(json["items"][1]["indices"], json!([0, 1, 2, 2, 3, 0]));
    }
}
