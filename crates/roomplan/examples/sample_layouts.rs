//! Print analysis summaries for a few random layouts.
//!
//! Usage:
//!   cargo run -p roomplan --example sample_layouts -- [count]

use roomplan::analysis::{analyze_layout, AnalysisCfg, WarningKind};
use roomplan::rand::{draw_layout, LayoutCfg, ReplayToken};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = LayoutCfg {
        doors: 2,
        furniture: 10,
        ..LayoutCfg::default()
    };
    for index in 0..count {
        let layout = draw_layout(cfg, ReplayToken { seed: 2025, index });
        let report = analyze_layout(&layout, AnalysisCfg::default());
        println!(
            "layout {index}: {:.1}x{:.1}m, efficiency={:.1}%, score={}, door hits={}, overlaps={}",
            layout.dimensions.length,
            layout.dimensions.width,
            report.efficiency,
            report.accessibility_score,
            report.count(WarningKind::DoorFurniture),
            report.count(WarningKind::FurnitureFurniture),
        );
        for s in &report.suggestions {
            println!("  - {s}");
        }
    }
}
