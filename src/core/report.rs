use std::fmt::Write;

use crate::domain::model::{AuditReport, AuditResult, ConflictResult, ContainerConflict, UnitRecord};

/// Plain text rendering of an audit, laid out like the auditor views.
pub fn render_text(report: &AuditReport, stale_after_days: i64) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📁 Inventory: {}", report.source);
    if let Some(age) = &report.inventory_age {
        let _ = writeln!(
            out,
            "   Last Modified: {} ({}){}",
            age.timestamp(),
            age.describe(),
            if age.is_stale(stale_after_days) { " ⚠️ stale" } else { "" }
        );
    }
    let _ = writeln!(
        out,
        "   Profile: {} | {} units with a location",
        report.profile, report.units_indexed
    );

    if let Some(gaps) = &report.gaps {
        let _ = writeln!(out);
        render_gaps(&mut out, gaps);
    }
    if let Some(conflicts) = &report.conflicts {
        let _ = writeln!(out);
        render_conflicts(&mut out, conflicts);
    }

    out
}

fn render_gaps(out: &mut String, results: &[AuditResult]) {
    let _ = writeln!(out, "🧱 Gap Auditor");
    for result in results {
        let _ = writeln!(out, "   {}: {}%", result.name, result.percent());
    }

    for result in results {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}]", result.name);
        if result.is_clean() {
            let _ = writeln!(out, "  ✅ Clean!");
            continue;
        }
        for container in &result.missing {
            let _ = writeln!(
                out,
                "  Unit {} - {} gaps: {}",
                container.label,
                container.missing_slots.len(),
                container.ranges.join(", ")
            );
        }
    }
}

fn render_conflicts(out: &mut String, result: &ConflictResult) {
    let _ = writeln!(out, "🧱 Condition Guard");
    if result.is_clean() {
        let _ = writeln!(out, "  ✅ Clean!");
        return;
    }

    let _ = writeln!(out, "  Found {} Mixed Containers", result.conflicts.len());
    for conflict in &result.conflicts {
        render_conflict(out, conflict);
    }
}

fn render_conflict(out: &mut String, conflict: &ContainerConflict) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  🔴 Conflict: {}", conflict.container);
    render_column(out, "🆕 NEW", conflict.new_quantity(), &conflict.new_units);
    render_column(out, "📜 USED", conflict.used_quantity(), &conflict.used_units);
    if !conflict.unknown_units.is_empty() {
        let quantity: u64 = conflict.unknown_units.iter().map(|u| u.quantity as u64).sum();
        render_column(out, "❔ UNKNOWN", quantity, &conflict.unknown_units);
    }
}

fn render_column(out: &mut String, heading: &str, quantity: u64, units: &[UnitRecord]) {
    let _ = writeln!(out, "    {} ({} pcs)", heading, quantity);
    for unit in units {
        let _ = writeln!(out, "      {}x {}", unit.quantity, unit.description);
        let _ = writeln!(out, "        📍 Hole: {} | ID: {}", unit.location, unit.id);
    }
}
