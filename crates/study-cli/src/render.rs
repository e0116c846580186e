//! Study table and graph export rendering.

use serde_json::json;

use study_types::{AnalysisReport, Difficulty, EffortRecord, ImportanceMode, PriorityBand};

/// Node colors cycle through this palette by community index.
pub const COMMUNITY_PALETTE: [&str; 7] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#33FFF5", "#F5FF33", "#A133FF",
];

/// Render the strategic study table.
pub fn study_table(report: &AnalysisReport) -> String {
    let ranked = report.ranked_topics();
    let topic_width = ranked
        .iter()
        .map(|t| t.chars().count())
        .chain(std::iter::once("Topic".len()))
        .max()
        .unwrap_or(5);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<topic_width$}  {:<8}  {:<6}  {:<10}  {:>7}\n",
        "Topic", "Priority", "Type", "Difficulty", "Minutes"
    ));
    out.push_str(&format!("{}\n", "-".repeat(topic_width + 39)));

    for topic in &ranked {
        let importance = &report.importance[*topic];
        let effort = report
            .effort
            .get(*topic)
            .copied()
            .unwrap_or_else(EffortRecord::unknown);
        let kind = if effort.is_math_heavy { "math" } else { "theory" };
        out.push_str(&format!(
            "{:<topic_width$}  {:<8}  {:<6}  {:<10}  {:>7}\n",
            topic,
            band_label(importance.priority()),
            kind,
            difficulty_label(effort.difficulty),
            effort.minutes
        ));
    }

    out.push_str(&format!(
        "\nTotal study time: {}\n",
        format_duration(report.total_minutes())
    ));

    if report.importance_mode == ImportanceMode::NoQuestions {
        out.push_str("Note: no question bank supplied; priorities default to low.\n");
    }
    if !report.insufficient_content.is_empty() {
        out.push_str(&format!(
            "Note: insufficient content for: {}\n",
            report.insufficient_content.join(", ")
        ));
    }
    out
}

/// "Xh Ym" with the hour part dropped under one hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{rest}m")
    } else {
        format!("{hours}h {rest}m")
    }
}

/// Graph and communities as JSON for an external renderer.
///
/// Nodes carry a palette color from their community index and a size
/// scaled by importance; topics outside any community (none, given the
/// partition covers the clustering graph) fall back to community 0.
pub fn graph_export(report: &AnalysisReport) -> serde_json::Value {
    let nodes: Vec<_> = report
        .graph
        .nodes()
        .iter()
        .map(|topic| {
            let community = report.partition.community_of(topic).unwrap_or(0);
            let score = report.importance.get(topic).map_or(0.0, |r| r.score);
            json!({
                "id": topic,
                "community": community,
                "color": COMMUNITY_PALETTE[community % COMMUNITY_PALETTE.len()],
                "size": 15.0 + score * 5.0,
            })
        })
        .collect();

    let edges: Vec<_> = report
        .graph
        .edges()
        .iter()
        .map(|edge| {
            json!({
                "source": edge.source,
                "target": edge.target,
                "weight": edge.weight,
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edges })
}

fn band_label(band: PriorityBand) -> &'static str {
    match band {
        PriorityBand::High => "HIGH",
        PriorityBand::Medium => "MEDIUM",
        PriorityBand::Low => "LOW",
    }
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Moderate => "moderate",
        Difficulty::Hard => "hard",
        Difficulty::Unknown => "unknown",
    }
}
