use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use roomplan::analysis::{analyze_layout, AnalysisCfg, IntersectionMode, SwingRegion};
use roomplan::catalog::{centered_placement, template, templates, templates_in, FurnitureTemplate};
use roomplan::door::{door_swing_path, door_swing_region};
use roomplan::model::Furniture;
use roomplan::outline::furniture_outline;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod layout_io;
mod provenance;

use layout_io::{emit, load_layout};

#[derive(Parser)]
#[command(name = "roomplan")]
#[command(about = "Room layout analysis: door swings, overlaps and space usage")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze a layout and print or write the JSON report
    Analyze {
        #[arg(long)]
        input: PathBuf,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also count edge crossings as furniture overlap
        #[arg(long)]
        exact_overlap: bool,
        /// Test door interference against the full swept sector
        #[arg(long)]
        sector_swing: bool,
    },
    /// Print the sampled swing path of one door
    Swing {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        door: String,
        /// Include the hinge point (closed sector)
        #[arg(long)]
        sector: bool,
    },
    /// Print the outline of one furniture item
    Outline {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        furniture: String,
    },
    /// List furniture templates
    Templates {
        #[arg(long)]
        category: Option<String>,
    },
    /// Add a template instance at the room center and write the layout
    Place {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        template: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze {
            input,
            out,
            exact_overlap,
            sector_swing,
        } => analyze(&input, out.as_deref(), exact_overlap, sector_swing),
        Action::Swing {
            input,
            door,
            sector,
        } => swing(&input, &door, sector),
        Action::Outline { input, furniture } => outline(&input, &furniture),
        Action::Templates { category } => list_templates(category.as_deref()),
        Action::Place {
            input,
            template,
            id,
            out,
        } => place(&input, &template, &id, &out),
    }
}

fn analysis_cfg(exact_overlap: bool, sector_swing: bool) -> AnalysisCfg {
    AnalysisCfg {
        intersection: if exact_overlap {
            IntersectionMode::EdgeCrossing
        } else {
            IntersectionMode::VertexContainment
        },
        swing: if sector_swing {
            SwingRegion::Sector
        } else {
            SwingRegion::Arc
        },
        ..AnalysisCfg::default()
    }
}

fn analyze(input: &Path, out: Option<&Path>, exact_overlap: bool, sector_swing: bool) -> Result<()> {
    tracing::info!(input = %input.display(), exact_overlap, sector_swing, "analyze");
    let layout = load_layout(input)?;
    let cfg = analysis_cfg(exact_overlap, sector_swing);
    let report = analyze_layout(&layout, cfg);
    tracing::info!(
        efficiency = report.efficiency,
        accessibility = report.accessibility_score,
        warnings = report.warnings.len(),
        "analysis done"
    );
    for w in &report.warnings {
        tracing::warn!(id = %w.id, "{}", w.message);
    }

    let doc = json!({
        "layout": layout.name,
        "analysis": report,
        "suggestionText": report.suggestions.iter().map(ToString::to_string).collect::<Vec<_>>(),
    });
    emit(&doc, out)?;

    if let Some(out) = out {
        let payload = provenance::Payload {
            input: input.to_string_lossy().into_owned(),
            layout: layout.name.clone(),
            params: serde_json::to_value(cfg)?,
        };
        let sidecar = provenance::write_sidecar(out, payload)?;
        tracing::info!(sidecar = %sidecar.display(), "provenance written");
    }
    Ok(())
}

fn swing(input: &Path, door_id: &str, sector: bool) -> Result<()> {
    tracing::info!(input = %input.display(), door = door_id, sector, "swing");
    let layout = load_layout(input)?;
    let door = layout
        .door(door_id)
        .ok_or_else(|| anyhow!("no door {door_id} in {}", input.display()))?;
    let path = if sector {
        door_swing_region(door, &layout.dimensions)
    } else {
        door_swing_path(door, &layout.dimensions)
    };
    emit(&points_json(&path), None)
}

fn outline(input: &Path, furniture_id: &str) -> Result<()> {
    tracing::info!(input = %input.display(), furniture = furniture_id, "outline");
    let layout = load_layout(input)?;
    let item = layout
        .furniture_item(furniture_id)
        .ok_or_else(|| anyhow!("no furniture {furniture_id} in {}", input.display()))?;
    emit(&points_json(&furniture_outline(item)), None)
}

fn list_templates(category: Option<&str>) -> Result<()> {
    let selected: Vec<&FurnitureTemplate> = match category {
        Some(c) => templates_in(c).collect(),
        None => templates().iter().collect(),
    };
    tracing::info!(category = ?category, count = selected.len(), "templates");
    let rows: Vec<_> = selected.iter().map(|t| template_json(t)).collect();
    emit(&rows, None)
}

fn place(input: &Path, template_id: &str, id: &str, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), template = template_id, id, "place");
    let mut layout = load_layout(input)?;
    let t = template(template_id).ok_or_else(|| anyhow!("unknown template {template_id}"))?;
    let item = Furniture::from_template(t, id, centered_placement(t, &layout.dimensions));
    layout.furniture.push(item);
    roomplan::model::validate(&layout).context("layout after placement")?;
    emit(&layout, Some(out))
}

fn points_json(points: &[roomplan::Vec2<f64>]) -> serde_json::Value {
    points.iter().map(|p| json!({ "x": p.x, "y": p.y })).collect()
}

fn template_json(t: &FurnitureTemplate) -> serde_json::Value {
    json!({
        "id": t.id,
        "name": t.name,
        "category": t.category,
        "type": t.kind,
        "shape": t.shape,
        "defaultWidth": t.default_width,
        "defaultDepth": t.default_depth,
        "defaultHeight": t.default_height,
        "icon": t.icon,
        "color": t.color,
    })
}
