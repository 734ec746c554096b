use kite_engine::coords::{Rect, Vec2};
use kite_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the `DrawList` that every frame is recorded into.
///
/// The list is cleared, not reallocated, between frames, so a tree painted
/// repeatedly reaches a steady state with no per-frame allocation.
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut root: Element = Polygon::new(Diamond::new()).into();
///
/// let draw_list = ui.frame(&mut root, Vec2::new(320.0, 200.0));
/// consume(draw_list.mesh().vertex_bytes(), draw_list.mesh().index_bytes());
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    frames: u64,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new(), frames: 0 }
    }

    /// Lays out and paints `root` into a fresh frame covering `viewport`.
    ///
    /// The root always occupies the full viewport. The returned list stays
    /// valid until the next call.
    #[must_use]
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        let viewport = viewport.sanitized();
        // ── measure ───────────────────────────────────────────────────────
        // The root's measured size is unused; the pass lets children settle.
        let _ = root.measure(Constraints::loose(viewport));
        let rect = Rect::from_size(viewport);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }

        self.frames += 1;
        log::debug!(
            "frame {} at {}x{}: {} items, {} vertices, {} indices",
            self.frames,
            viewport.x,
            viewport.y,
            self.draw_list.items().len(),
            self.draw_list.mesh().vertices().len(),
            self.draw_list.mesh().indices().len(),
        );

        &mut self.draw_list
    }

    /// Number of frames recorded so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
