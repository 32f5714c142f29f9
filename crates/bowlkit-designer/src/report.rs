//! Cut-list reporting.
//!
//! Turns computed ring geometry into the rows a woodworker cuts from:
//! one row per used ring, with segments of equal width and colour grouped
//! together. All values are millimetres; text output goes through
//! `bowlkit_core::units`.

use std::fmt::Write as _;

use bowlkit_core::units::{format_angle_deg, format_length, MeasurementSystem};
use bowlkit_core::{palette, GeometryError};
use serde::Serialize;

use crate::ring::Ring;
use crate::ring_calculator::BowlGeometry;
use crate::segments::calc_ring_trapz;

/// Segments of one ring sharing the same width and colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentGroup {
    pub seglen: f64,
    pub color: String,
    pub wood: String,
    pub count: usize,
    /// Mitre angle of each segment end (degrees).
    pub cut_angle_deg: f64,
    pub outside_length: f64,
    pub inside_length: f64,
    pub strip_width: f64,
    /// Strip needed for the whole group, saw kerf excluded.
    pub strip_length: f64,
}

impl SegmentGroup {
    /// Strip needed for the whole group including one kerf per cut.
    pub fn total_strip_length(&self, kerf: f64) -> f64 {
        self.strip_length + kerf * self.count as f64
    }
}

/// One cut-list line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutListRow {
    pub index: usize,
    pub label: String,
    pub diameter: f64,
    pub thickness: f64,
    /// Ring twist (radians).
    pub rotation: f64,
    pub groups: Vec<SegmentGroup>,
}

/// "Base" for the bottom ring, the ring number otherwise.
pub fn ring_label(index: usize) -> String {
    if index == 0 {
        "Base".to_string()
    } else {
        index.to_string()
    }
}

/// Groups the segments of `ring` by `(seglen, colour)` in first-seen order.
pub fn segment_groups(ring: &Ring, index: usize) -> Result<Vec<SegmentGroup>, GeometryError> {
    let trapz = calc_ring_trapz(ring, index, false)?;
    let mut groups: Vec<SegmentGroup> = Vec::new();

    for (seg, trapezoid) in trapz.trapezoids.iter().enumerate() {
        let seglen = ring.seglen[seg];
        let color = palette::normalize_color(&ring.clrs[seg]);
        let outside_length = 2.0 * trapezoid.outer_leading().y;

        if let Some(group) = groups
            .iter_mut()
            .find(|g| g.seglen == seglen && g.color == color)
        {
            group.count += 1;
            group.strip_length += outside_length;
            continue;
        }

        groups.push(SegmentGroup {
            seglen,
            wood: ring.wood[seg].clone(),
            color,
            count: 1,
            cut_angle_deg: 180.0 / ring.segs as f64 * seglen,
            outside_length,
            inside_length: 2.0 * trapezoid.inner_leading().y,
            strip_width: trapezoid.outer_leading().x - trapezoid.inner_leading().x,
            strip_length: outside_length,
        });
    }
    Ok(groups)
}

/// Cut-list rows for every used ring of `geometry`.
pub fn cut_list(geometry: &BowlGeometry) -> Result<Vec<CutListRow>, GeometryError> {
    geometry
        .used()
        .iter()
        .enumerate()
        .map(|(index, ring)| {
            Ok(CutListRow {
                index,
                label: ring_label(index),
                diameter: 2.0 * ring.xvals.max,
                thickness: ring.height,
                rotation: ring.theta,
                groups: segment_groups(ring, index)?,
            })
        })
        .collect()
}

/// Renders `rows` as a plain-text table.
///
/// `step` is the inch fraction denominator for imperial output.
pub fn format_cut_list(
    rows: &[CutListRow],
    system: MeasurementSystem,
    step: Option<u32>,
    kerf: f64,
) -> String {
    let len = |mm: f64| format_length(mm, system, step);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>10} {:>10} {:>9} {:>5} {:>9} {:>10} {:>10} {:>10} {:>10}  {}",
        "Ring", "Diameter", "Thickness", "Rotation", "Segs", "Cut", "Outside", "Inside", "Width",
        "Strip", "Wood"
    );
    for row in rows {
        for (i, group) in row.groups.iter().enumerate() {
            let (label, diameter, thickness, rotation) = if i == 0 {
                (
                    row.label.clone(),
                    len(row.diameter),
                    len(row.thickness),
                    format_angle_deg(row.rotation),
                )
            } else {
                Default::default()
            };
            let _ = writeln!(
                out,
                "{:<6} {:>10} {:>10} {:>9} {:>5} {:>9} {:>10} {:>10} {:>10} {:>10}  {}",
                label,
                diameter,
                thickness,
                rotation,
                group.count,
                format!("{:.2}°", group.cut_angle_deg),
                len(group.outside_length),
                len(group.inside_length),
                len(group.strip_width),
                len(group.total_strip_length(kerf)),
                palette::capitalize(&group.wood),
            );
        }
    }
    out
}
