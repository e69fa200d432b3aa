use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use graham::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "graham")]
#[command(about = "Convex hulls of integer point sets (Graham scan)")]
struct Cmd {
    /// Without a subcommand, print the hull of the built-in ten-point input
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Args, Clone, Debug, Default)]
struct OutputOpts {
    /// Print the hull as JSON instead of the text report
    #[arg(long)]
    json: bool,
    /// Fail on single-point and segment hulls
    #[arg(long)]
    strict: bool,
    /// Also write the hull JSON to this path, with a provenance sidecar next to it
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Hull of points read from a CSV (columns x,y) or JSON ([[x,y],...]) file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        output: OutputOpts,
    },
    /// Hull of a reproducible random point cloud
    Random {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Half side of the sampling square (or disk radius)
        #[arg(long, default_value_t = 100)]
        radius: i64,
        /// Sample from a disk instead of a square
        #[arg(long)]
        disk: bool,
        #[command(flatten)]
        output: OutputOpts,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        None => reference(),
        Some(Action::Hull { input, output }) => hull_from_file(&input, &output),
        Some(Action::Random {
            count,
            seed,
            index,
            radius,
            disk,
            output,
        }) => random(count, seed, index, radius, disk, &output),
        Some(Action::Report) => report(),
    }
}

fn reference() -> Result<()> {
    let hull = graham_scan(&reference_points())?;
    print!("{hull}");
    Ok(())
}

fn hull_from_file(input: &Path, output: &OutputOpts) -> Result<()> {
    tracing::info!(input = %input.display(), "hull");
    let points = input::read_points(input)?;
    let params = json!({
        "source": "file",
        "input": input.to_string_lossy(),
        "points": points.len(),
        "strict": output.strict,
    });
    emit(&points, output, params)
}

fn random(count: usize, seed: u64, index: u64, radius: i64, disk: bool, output: &OutputOpts) -> Result<()> {
    tracing::info!(count, seed, index, radius, disk, "random");
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        radius,
        shape: if disk { CloudShape::Disk } else { CloudShape::Square },
    };
    let points = draw_cloud(cfg, ReplayToken { seed, index })?;
    let params = json!({
        "source": "random",
        "count": count,
        "seed": seed,
        "index": index,
        "radius": radius,
        "shape": if disk { "disk" } else { "square" },
        "strict": output.strict,
    });
    emit(&points, output, params)
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": graham::VERSION,
        "coord_limit": COORD_LIMIT,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Serialized hull: vertices in pop order, like the text report.
#[derive(Debug, Serialize)]
struct HullDoc {
    kind: &'static str,
    vertices: Vec<Vertex>,
    twice_area: i128,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Vertex {
    x: i64,
    y: i64,
}

impl From<&Hull> for HullDoc {
    fn from(hull: &Hull) -> Self {
        let kind = match hull.kind() {
            HullKind::Point => "point",
            HullKind::Segment => "segment",
            HullKind::Polygon => "polygon",
        };
        Self {
            kind,
            vertices: hull.pop_order().map(|p| Vertex { x: p.x, y: p.y }).collect(),
            twice_area: hull.twice_area(),
        }
    }
}

fn emit(points: &[Point], output: &OutputOpts, params: serde_json::Value) -> Result<()> {
    let cfg = HullCfg {
        reject_degenerate: output.strict,
    };
    let hull = graham_scan_with(points, cfg)?;
    tracing::info!(
        points = points.len(),
        vertices = hull.len(),
        kind = ?hull.kind(),
        "hull_done"
    );
    let doc = HullDoc::from(&hull);
    if output.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{hull}");
    }
    if let Some(out) = &output.out {
        write_doc(out, &doc)?;
        let sidecar = provenance::write_sidecar(out, provenance::Payload::new(params))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    }
    Ok(())
}

fn write_doc(out: &Path, doc: &HullDoc) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
