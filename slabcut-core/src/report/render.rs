//! Report renderer.
//!
//! The report is built from whole blocks: an optional heat code line, the
//! summary, the expected-cut-lengths block (which carries the cut-centers
//! line), and the marking visualization. The summary always comes right
//! after the code line; the two content blocks swap as units when the
//! configuration asks for it.

use std::fmt::Write;

use crate::config::Configuration;
use crate::model::{AllocationResult, MarkingResult, ValidatedRequest};

use super::display::{format_quantity, round_half_up};

/// Build the heat code identifier, if both fragments are present.
pub fn build_identifier(request: &ValidatedRequest, prefix: &str) -> Option<String> {
    if request.code_front.is_empty() || request.code_back.is_empty() {
        return None;
    }
    Some(format!(
        "{prefix}{}-0{}",
        request.code_front, request.code_back
    ))
}

/// Render the full report.
pub fn render_report(
    alloc: &AllocationResult,
    marks: &MarkingResult,
    identifier: Option<&str>,
    config: &Configuration,
) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(4);

    if let Some(code) = identifier {
        blocks.push(format!("Code: {code}"));
    }

    blocks.push(summary_block(alloc, config));

    let lengths = lengths_block(alloc, marks, config);
    let visualization = visualization_block(marks);
    if config.swap_section_order {
        blocks.push(visualization);
        blocks.push(lengths);
    } else {
        blocks.push(lengths);
        blocks.push(visualization);
    }

    blocks.join("\n\n")
}

/// Unit suffix for displayed quantities.
fn suffix(config: &Configuration) -> &'static str {
    if config.hide_unit_suffix {
        ""
    } else {
        " mm"
    }
}

/// Summary block: slab length, instructed lengths, loss, remainder.
fn summary_block(alloc: &AllocationResult, config: &Configuration) -> String {
    let q = |v: f64| format_quantity(v, config.round_to_integer);
    let sfx = suffix(config);

    let mut out = String::new();
    writeln!(out, "Slab length: {}{sfx}", q(alloc.slab_length)).unwrap();
    for (i, guide) in alloc.guides.iter().enumerate() {
        writeln!(out, "Guide {}: {}{sfx}", i + 1, q(*guide)).unwrap();
    }
    writeln!(
        out,
        "Cut loss: {}{sfx} \u{d7} {} = {}{sfx}",
        q(config.cut_loss),
        alloc.cut_count(),
        q(alloc.total_loss)
    )
    .unwrap();
    write!(
        out,
        "Remainder: {}{sfx} (+{}{sfx} each)",
        q(alloc.remainder),
        q(alloc.per_guide_addition)
    )
    .unwrap();
    out
}

/// Expected cut lengths per segment, plus the cut-centers line.
fn lengths_block(
    alloc: &AllocationResult,
    marks: &MarkingResult,
    config: &Configuration,
) -> String {
    let sfx = suffix(config);

    let mut out = String::from("Expected cut lengths:");
    for (i, real) in alloc.real_lengths.iter().enumerate() {
        write!(
            out,
            "\n  {}: {}{sfx}",
            i + 1,
            format_quantity(*real, config.round_to_integer)
        )
        .unwrap();
    }

    // Centers are diagram positions; always whole millimeters.
    let centers: Vec<String> = marks
        .cumulative_centers
        .iter()
        .map(|c| round_half_up(*c).to_string())
        .collect();
    let label = if config.hide_unit_suffix {
        "Cut centers"
    } else {
        "Cut centers (mm)"
    };
    write!(out, "\n{label}: [{}]", centers.join(", ")).unwrap();

    out
}

/// Marking visualization: H-1(mark)--2(mark)-...-T.
fn visualization_block(marks: &MarkingResult) -> String {
    let mut visual = String::from("H");
    for (i, mark) in marks.per_segment_marks.iter().enumerate() {
        // Marks are diagram positions; always whole millimeters.
        write!(visual, "-{}({})-", i + 1, round_half_up(*mark)).unwrap();
    }
    visual.push('T');
    format!("Marking visualization:\n{visual}")
}
