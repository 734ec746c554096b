use anyhow::{ensure, Context};

use kite_engine::coords::Vec2;
use kite_engine::logging::{init_logging, LoggingConfig};
use kite_engine::scene::DrawList;
use kite_kml::Node;

use crate::dsl::{BuildCtx, BuildError, DslLoader, WidgetFactory};
use crate::scene::UiScene;
use crate::widget::Element;

// ── Application ───────────────────────────────────────────────────────────

/// Headless application builder.
///
/// Configure components, extra widgets and viewport sizes, then call
/// [`run`](Self::run) with a `.kml` document or
/// [`run_widget`](Self::run_widget) with a Rust tree. The tree is built once
/// and repainted at every configured size, in order; each frame's
/// `DrawList` goes to the `on_frame` callback.
///
/// ```rust,ignore
/// Application::new()
///     .sizes([(320.0, 200.0), (100.0, 50.0)])
///     .component("Badge", include_str!("ui/badge.kml"))
///     .run(include_str!("ui/main.kml"), |viewport, draw_list| {
///         upload(draw_list.mesh().vertex_bytes(), draw_list.mesh().index_bytes());
///         Ok(())
///     })?;
/// ```
pub struct Application {
    sizes:      Vec<Vec2>,
    components: Vec<(String, String)>,
    widgets:    Vec<(String, WidgetFactory)>,
    logging:    Option<LoggingConfig>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            sizes:      vec![Vec2::new(1280.0, 720.0)],
            components: Vec::new(),
            widgets:    Vec::new(),
            logging:    None,
        }
    }

    /// Paint a single frame at `width` x `height`.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.sizes = vec![Vec2::new(width, height)];
        self
    }

    /// Paint one frame per size, in order.
    pub fn sizes(mut self, sizes: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.sizes = sizes.into_iter().map(Vec2::from).collect();
        self
    }

    /// Register a `.kml` source under `alias` so documents can reference it
    /// after `import "..." as Alias`.
    pub fn component(mut self, alias: impl Into<String>, src: impl Into<String>) -> Self {
        self.components.push((alias.into(), src.into()));
        self
    }

    /// Register a widget factory on top of the built-in ones.
    pub fn widget<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&Node, &BuildCtx<'_>) -> Result<Element, BuildError> + 'static,
    {
        self.widgets.push((name.into(), Box::new(factory)));
        self
    }

    /// Initialise the global logger before the first frame.
    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging = Some(config);
        self
    }

    // ── Entry points ──────────────────────────────────────────────────────

    /// Parse and build `main_src`, then paint it at every configured size.
    pub fn run<F>(mut self, main_src: &str, on_frame: F) -> anyhow::Result<()>
    where
        F: FnMut(Vec2, &mut DrawList) -> anyhow::Result<()>,
    {
        if let Some(config) = &self.logging {
            init_logging(config.clone());
        }

        let loader = self.loader()?;
        let doc = loader.parse(main_src).context("parsing main document")?;
        let root = loader.build(&doc).context("building main document")?;
        self.frames(root, on_frame)
    }

    /// Paint a Rust-built tree at every configured size.
    pub fn run_widget<F>(self, root: impl Into<Element>, on_frame: F) -> anyhow::Result<()>
    where
        F: FnMut(Vec2, &mut DrawList) -> anyhow::Result<()>,
    {
        if let Some(config) = &self.logging {
            init_logging(config.clone());
        }
        self.frames(root.into(), on_frame)
    }

    fn loader(&mut self) -> anyhow::Result<DslLoader> {
        let mut loader = DslLoader::new();
        for (name, factory) in self.widgets.drain(..) {
            loader.register_widget(name, factory);
        }
        for (alias, src) in &self.components {
            loader
                .parse_and_register(alias.as_str(), src)
                .with_context(|| format!("parsing component `{alias}`"))?;
        }
        Ok(loader)
    }

    fn frames<F>(&self, mut root: Element, mut on_frame: F) -> anyhow::Result<()>
    where
        F: FnMut(Vec2, &mut DrawList) -> anyhow::Result<()>,
    {
        ensure!(!self.sizes.is_empty(), "no viewport sizes configured");

        let mut scene = UiScene::new();
        for &size in &self.sizes {
            let draw_list = scene.frame(&mut root, size);
            on_frame(size, draw_list)
                .with_context(|| format!("frame at {}x{}", size.x, size.y))?;
        }
        log::info!("painted {} frame(s)", scene.frame_count());
        Ok(())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::props;
    use crate::widgets::container::Container;
    use crate::widgets::diamond::Diamond;
    use crate::widgets::polygon::Polygon;

    #[test]
    fn one_frame_per_size() {
        let mut seen = Vec::new();
        Application::new()
            .sizes([(100.0, 50.0), (8.0, 300.0)])
            .run("Diamond", |size, list| {
                let v = list.mesh().vertices();
                seen.push((size, v[3].xy()));
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec![
            (Vec2::new(100.0, 50.0), Vec2::new(50.0, 50.0)),
            (Vec2::new(8.0, 300.0), Vec2::new(4.0, 300.0)),
        ]);
    }

    #[test]
    fn components_and_widgets_reach_the_loader() {
        let mut count = 0;
        Application::new()
            .size(200.0, 200.0)
            .component("Badge", "Triangle { width: 10  height: 10 }")
            .widget("Spacer", |node, _| {
                let h = props::number(node, "height")?.unwrap_or(0.0);
                Ok(Container::new().min_size(0.0, h).into())
            })
            .run(
                r#"import "badge.kml" as Badge
                   Column { Spacer { height: 4 }  Badge }"#,
                |_, list| {
                    count = list.mesh().vertices().len();
                    Ok(())
                },
            )
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn build_errors_carry_context() {
        let err = Application::new().run("Hexagon", |_, _| Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "building main document");
        assert!(err.root_cause().to_string().contains("unknown widget `Hexagon`"));
    }

    #[test]
    fn bad_component_is_reported() {
        let err = Application::new()
            .component("Broken", "Row {")
            .run("Diamond", |_, _| Ok(()))
            .unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn frame_errors_stop_the_run() {
        let mut frames = 0;
        let result = Application::new()
            .sizes([(1.0, 1.0), (2.0, 2.0)])
            .run_widget(Polygon::new(Diamond::new()), |_, _| {
                frames += 1;
                anyhow::bail!("sink closed")
            });
        assert!(result.is_err());
        assert_eq!(frames, 1);
    }

    #[test]
    fn empty_size_list_is_an_error() {
        let sizes: [(f32, f32); 0] = [];
        assert!(Application::new().sizes(sizes).run("Diamond", |_, _| Ok(())).is_err());
    }
}
