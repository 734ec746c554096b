mod cli;
mod dump;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;

use kite_engine::coords::Vec2;
use kite_engine::logging::{init_logging, LoggingConfig};
use kite_ui::Application;

const BUNDLED_MAIN: &str = include_str!("../ui/main.kml");
const BUNDLED_COMPONENTS: [(&str, &str); 1] = [("Badge", include_str!("../ui/badge.kml"))];
const DEFAULT_SIZE: (f32, f32) = (320.0, 200.0);

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let inputs = args.inputs()?;

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log_level {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    let sizes = if inputs.sizes.is_empty() {
        vec![Vec2::from(DEFAULT_SIZE)]
    } else {
        inputs.sizes
    };

    let mut app = Application::new().sizes(sizes.iter().map(|s| (s.x, s.y)));
    let main_src = match &inputs.file {
        Some(path) => {
            let src = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (alias, component) in load_imports(path, &src)? {
                app = app.component(alias, component);
            }
            src
        }
        None => {
            log::info!("no document given, painting the bundled demo");
            for (alias, component) in BUNDLED_COMPONENTS {
                app = app.component(alias, component);
            }
            BUNDLED_MAIN.to_string()
        }
    };

    app.run(&main_src, |viewport, draw_list| {
        log::info!("{}", dump::frame_summary(viewport, draw_list));
        if args.summary {
            return Ok(());
        }
        let json = dump::frame_json(viewport, draw_list);
        let text = if args.compact {
            serde_json::to_string(&json)?
        } else {
            serde_json::to_string_pretty(&json)?
        };
        println!("{text}");
        Ok(())
    })
}

/// Reads every file reachable through `import` from `main`, resolving each
/// path against the directory of the file that imports it.
///
/// An alias names one component for the whole run; importing a different
/// file under an alias already in use is an error.
fn load_imports(main: &Path, main_src: &str) -> anyhow::Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut pending: Vec<(PathBuf, String)> = vec![(main.to_path_buf(), main_src.to_string())];

    while let Some((path, src)) = pending.pop() {
        let doc = kite_kml::parse_str(&src).with_context(|| format!("parsing {}", path.display()))?;
        let base = path.parent().unwrap_or(Path::new("."));

        for import in doc.imports {
            let file = base.join(&import.path);
            if let Some(first) = seen.get(&import.alias) {
                if *first != file {
                    bail!(
                        "alias `{}` imported from {} by {}, but already bound to {}",
                        import.alias,
                        file.display(),
                        path.display(),
                        first.display()
                    );
                }
                continue;
            }
            seen.insert(import.alias.clone(), file.clone());
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading `{}` imported by {}", file.display(), path.display()))?;
            log::debug!("component `{}` from {}", import.alias, file.display());
            out.push((import.alias, text.clone()));
            pending.push((file, text));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_demo_paints() {
        let mut frames = Vec::new();
        let mut app = Application::new().size(DEFAULT_SIZE.0, DEFAULT_SIZE.1);
        for (alias, component) in BUNDLED_COMPONENTS {
            app = app.component(alias, component);
        }
        app.run(BUNDLED_MAIN, |viewport, list| {
            frames.push(dump::frame_json(viewport, list));
            Ok(())
        })
        .unwrap();

        // Background, then two shapes per row.
        let items = frames[0]["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["kind"], "rect");
        assert!(items[1..].iter().all(|i| i["kind"] == "mesh"));
    }

    #[test]
    fn imports_resolve_relative_to_importer() {
        let dir = std::env::temp_dir().join(format!("kite-studio-{}", std::process::id()));
        fs::create_dir_all(dir.join("parts")).unwrap();
        fs::write(dir.join("parts/a.kml"), r#"import "b.kml" as B  Row { B }"#).unwrap();
        fs::write(dir.join("parts/b.kml"), "Triangle").unwrap();

        let main_src = r#"import "parts/a.kml" as A  Column { A }"#;
        let found = load_imports(&dir.join("main.kml"), main_src).unwrap();
        let aliases: Vec<&str> = found.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(aliases, ["A", "B"]);
        assert_eq!(found[1].1, "Triangle");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn alias_rebound_to_another_file_is_rejected() {
        let dir = std::env::temp_dir().join(format!("kite-studio-alias-{}", std::process::id()));
        fs::create_dir_all(dir.join("parts")).unwrap();
        fs::write(dir.join("a.kml"), r#"import "parts/b.kml" as B  Row { B }"#).unwrap();
        fs::write(dir.join("parts/b.kml"), "Triangle").unwrap();
        fs::write(dir.join("b.kml"), "Diamond").unwrap();

        // `a.kml` binds B to parts/b.kml; main already bound it to b.kml.
        let main_src = r#"import "a.kml" as A  import "b.kml" as B  Column { A B }"#;
        let err = load_imports(&dir.join("main.kml"), main_src).unwrap_err();
        assert!(err.to_string().contains("alias `B`"));

        // The same file under the same alias twice is fine.
        fs::write(dir.join("a.kml"), r#"import "b.kml" as B  Row { B }"#).unwrap();
        let found = load_imports(&dir.join("main.kml"), main_src).unwrap();
        assert_eq!(found.len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_import_names_the_file() {
        let err = load_imports(Path::new("/nonexistent/main.kml"), r#"import "x.kml" as X  Diamond"#)
            .unwrap_err();
        assert!(err.to_string().contains("x.kml"));
    }
}
