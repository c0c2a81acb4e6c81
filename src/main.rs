//! sdgen - compose schema.org JSON-LD for pages from site settings and
//! content snapshots.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use rayon::prelude::*;
use sdgen::{
    SchemaComposer, SiteConfig, log,
    compose::RenderContext,
    content::{self, CommerceItem, ContentItem},
    output,
    schema::{TypeRegistry, hours::opening_hours_specification},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let composer = match cli.date {
        Some(date) => SchemaComposer::new(&config).on(date),
        None => SchemaComposer::new(&config),
    };

    match &cli.command {
        Commands::Render { items, commerce } => render(&composer, items, commerce.as_deref()),
        Commands::Preview { item, commerce } => preview(&composer, item, commerce.as_deref()),
        Commands::Inject {
            item,
            html,
            output,
            commerce,
        } => inject(&composer, item, html, output.as_deref(), commerce.as_deref()),
        Commands::Types { overrides } => {
            list_types(&config, *overrides);
            Ok(())
        }
        Commands::Hours { spec } => print_hours(spec),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config = SiteConfig::load(root, &cli.config)?;
    config.validate()?;
    Ok(config)
}

fn load_commerce(path: Option<&Path>) -> Result<Option<CommerceItem>> {
    path.map(|path| {
        CommerceItem::from_path(path)
            .with_context(|| format!("Failed to load commerce data {}", path.display()))
    })
    .transpose()
}

fn load_item(path: &Path) -> Result<ContentItem> {
    ContentItem::from_path(path).with_context(|| format!("Failed to load item {}", path.display()))
}

/// Expand directories into the snapshot files they contain.
fn expand_items(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .flat_map(|path| {
            if path.is_dir() {
                content::collect_snapshots(path)
            } else {
                vec![path.clone()]
            }
        })
        .collect()
}

fn render(composer: &SchemaComposer, items: &[PathBuf], commerce: Option<&Path>) -> Result<()> {
    let commerce = load_commerce(commerce)?;

    if items.is_empty() {
        let schemas = composer.compose(RenderContext::SiteWide, commerce.as_ref());
        log!("render"; "site-wide: {} objects", schemas.len());
        print!("{}", output::render_scripts(&schemas)?);
        return Ok(());
    }

    let files = expand_items(items);
    let rendered = files
        .par_iter()
        .map(|path| -> Result<String> {
            let item = load_item(path)?;
            let schemas = composer.compose(RenderContext::Singular(&item), commerce.as_ref());
            log!("render"; "{}: {} objects", path.display(), schemas.len());
            Ok(output::render_scripts(&schemas)?)
        })
        .collect::<Result<Vec<String>>>()?;

    for scripts in rendered {
        print!("{scripts}");
    }
    Ok(())
}

fn preview(composer: &SchemaComposer, item: &Path, commerce: Option<&Path>) -> Result<()> {
    let item = load_item(item)?;
    let commerce = load_commerce(commerce)?;
    println!("{}", output::preview(composer, &item, commerce.as_ref())?);
    Ok(())
}

fn inject(
    composer: &SchemaComposer,
    item: &Path,
    html: &Path,
    out: Option<&Path>,
    commerce: Option<&Path>,
) -> Result<()> {
    let item = load_item(item)?;
    let commerce = load_commerce(commerce)?;
    let page = fs::read_to_string(html).with_context(|| format!("Failed to read {}", html.display()))?;

    let schemas = composer.compose(RenderContext::Singular(&item), commerce.as_ref());
    let result = output::inject_into_head(&page, &schemas)?;

    let target = out.unwrap_or(html);
    fs::write(target, result).with_context(|| format!("Failed to write {}", target.display()))?;
    log!("inject"; "{} objects -> {}", schemas.len(), target.display());
    Ok(())
}

fn list_types(config: &SiteConfig, overrides: bool) {
    let registry = TypeRegistry::default();
    let choices = if overrides {
        registry.override_choices()
    } else {
        registry.iter().collect()
    };
    for (key, label) in choices {
        println!("{key:<22}{label}");
    }

    let default = config.schema.default_type.trim();
    match registry.label(default) {
        Some(label) => log!("types"; "default: {} ({})", default, label),
        None => log!("warn"; "default type `{}` is not selectable", default),
    }
}

fn print_hours(spec: &str) -> Result<()> {
    let specs = opening_hours_specification(spec);
    if specs.is_empty() {
        log!("warn"; "no valid entries in `{}`", spec);
    }
    println!("{}", serde_json::to_string_pretty(&specs)?);
    Ok(())
}
