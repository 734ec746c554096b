use std::collections::HashMap;

use kite_kml::{parse_str, Document, Node, ParseError};

use super::builtins;
use super::error::BuildError;
use crate::widget::Element;

/// Component expansion depth at which [`BuildError::RecursionLimit`] fires.
pub const MAX_COMPONENT_DEPTH: usize = 32;

/// Turns one node into a widget. Registered under the node's widget name.
pub type WidgetFactory = Box<dyn Fn(&Node, &BuildCtx<'_>) -> Result<Element, BuildError>>;

// ── DslLoader ─────────────────────────────────────────────────────────────

/// Widget-factory registry plus the component documents `.kml` sources may
/// import.
///
/// [`DslLoader::new`] comes with `Column`, `Row`, `Container`, `Diamond` and
/// `Triangle` registered.
pub struct DslLoader {
    factories: HashMap<String, WidgetFactory>,
    components: HashMap<String, Document>,
}

impl DslLoader {
    pub fn new() -> Self {
        let mut loader = Self::empty();
        builtins::register(&mut loader);
        loader
    }

    /// A loader with no widgets registered.
    pub fn empty() -> Self {
        Self { factories: HashMap::new(), components: HashMap::new() }
    }

    /// Registers `factory` under `name`, replacing any earlier factory.
    pub fn register_widget<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Node, &BuildCtx<'_>) -> Result<Element, BuildError> + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            log::debug!("widget factory `{name}` replaced");
        }
        self
    }

    /// Registers a parsed document under `alias` so other documents can use
    /// it as a widget after `import "..." as Alias`.
    pub fn register_component(&mut self, alias: impl Into<String>, doc: Document) -> &mut Self {
        let alias = alias.into();
        if self.factories.contains_key(&alias) {
            log::warn!("component `{alias}` is shadowed by a widget of the same name");
        }
        self.components.insert(alias, doc);
        self
    }

    /// Parses `src` and registers it under `alias`.
    pub fn parse_and_register(
        &mut self,
        alias: impl Into<String>,
        src: &str,
    ) -> Result<(), ParseError> {
        let doc = parse_str(src)?;
        self.register_component(alias, doc);
        Ok(())
    }

    pub fn parse(&self, src: &str) -> Result<Document, ParseError> {
        parse_str(src)
    }

    /// Builds the widget tree for `doc`.
    ///
    /// Every import must name a registered component; the check runs before
    /// any widget is built.
    pub fn build(&self, doc: &Document) -> Result<Element, BuildError> {
        self.check_imports(doc)?;
        let ctx = BuildCtx { loader: self, depth: 0 };
        let root = ctx.build_child(&doc.root)?;
        log::debug!("built `{}` ({} nodes)", doc.root.widget, doc.walk().count());
        Ok(root)
    }

    /// Registered widget names, sorted.
    pub fn widget_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn has_component(&self, alias: &str) -> bool {
        self.components.contains_key(alias)
    }

    fn check_imports(&self, doc: &Document) -> Result<(), BuildError> {
        match doc.imports.iter().find(|i| !self.components.contains_key(&i.alias)) {
            Some(import) => Err(BuildError::MissingImport {
                alias: import.alias.clone(),
                path: import.path.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for DslLoader {
    fn default() -> Self {
        Self::new()
    }
}

// ── BuildCtx ──────────────────────────────────────────────────────────────

/// Handed to factories so they can build their child nodes.
pub struct BuildCtx<'a> {
    loader: &'a DslLoader,
    depth: usize,
}

impl BuildCtx<'_> {
    /// Builds `node` with whichever factory or component its name resolves
    /// to. Factories take precedence over components.
    pub fn build_child(&self, node: &Node) -> Result<Element, BuildError> {
        if let Some(factory) = self.loader.factories.get(&node.widget) {
            log::trace!("{}:{}: building `{}`", node.line, node.col, node.widget);
            return factory(node, self);
        }

        let Some(component) = self.loader.components.get(&node.widget) else {
            return Err(BuildError::UnknownWidget {
                name: node.widget.clone(),
                line: node.line,
                col: node.col,
            });
        };
        if self.depth >= MAX_COMPONENT_DEPTH {
            return Err(BuildError::RecursionLimit { alias: node.widget.clone() });
        }
        if !node.props.is_empty() || !node.children.is_empty() {
            log::warn!(
                "{}:{}: component `{}` takes no properties or children; ignored",
                node.line,
                node.col,
                node.widget
            );
        }

        self.loader.check_imports(component)?;
        let nested = BuildCtx { loader: self.loader, depth: self.depth + 1 };
        nested.build_child(&component.root)
    }

    pub fn build_children(&self, node: &Node) -> Result<Vec<Element>, BuildError> {
        node.children.iter().map(|c| self.build_child(c)).collect()
    }
}
