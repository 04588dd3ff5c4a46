//! SVG assembly from a projected chart layout.
//!
//! Pure string building: every drawable element comes straight from the
//! layout the projector produced. Each cell rectangle carries the upstream
//! data attributes plus a `<title>` child so hovering in any SVG viewer
//! shows the tooltip label.

use std::fmt::Write as _;

use heatcal_core::{ChartConfig, ChartLayout};

const AXIS_TICK_LEN: f64 = 6.0;
const LEGEND_SWATCH_WIDTH: f64 = 30.0;
const LEGEND_SWATCH_HEIGHT: f64 = 12.0;

/// Escape a string for use in XML text nodes and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Assemble the complete standalone SVG document.
pub fn document(layout: &ChartLayout, config: &ChartConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif">"#,
        config.width, config.height
    );

    write_heading(&mut out, layout, config);
    write_cells(&mut out, layout);
    write_axes(&mut out, layout, config);
    write_legend(&mut out, layout, config);

    out.push_str("</svg>\n");
    out
}

fn write_heading(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let cx = config.width / 2.0;
    let _ = writeln!(
        out,
        r#"  <text id="title" x="{cx}" y="20" text-anchor="middle" font-size="16">Monthly Global Land-Surface Temperature</text>"#
    );
    let _ = writeln!(
        out,
        r#"  <text id="description" x="{cx}" y="40" text-anchor="middle" font-size="12">base temperature {} ℃</text>"#,
        layout.base_temperature
    );
}

fn write_cells(out: &mut String, layout: &ChartLayout) {
    for cell in &layout.cells {
        let _ = writeln!(
            out,
            r#"  <rect class="cell" x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}" data-year="{year}" data-month="{month}" data-temp="{temp}"><title>{tip}</title></rect>"#,
            x = cell.x,
            y = cell.y,
            w = cell.width,
            h = cell.height,
            fill = cell.fill,
            year = cell.year,
            month = cell.month_zero_indexed,
            temp = cell.temp_label,
            tip = escape(&cell.tooltip),
        );
    }
}

fn write_axes(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    let pad = config.padding;
    let axis_y = config.height - pad.bottom;

    // X axis: baseline, one tick per labelled year.
    let _ = writeln!(
        out,
        r#"  <g id="x-axis" stroke="black"><line x1="{}" y1="{axis_y}" x2="{}" y2="{axis_y}"/></g>"#,
        pad.left,
        config.width - pad.right
    );
    for tick in &layout.year_ticks {
        let _ = writeln!(
            out,
            r#"  <line x1="{x}" y1="{axis_y}" x2="{x}" y2="{y2}" stroke="black"/>"#,
            x = tick.x,
            y2 = axis_y + AXIS_TICK_LEN
        );
        let _ = writeln!(
            out,
            r#"  <text x="{x}" y="{ty}" text-anchor="middle" font-size="10">{year}</text>"#,
            x = tick.x,
            ty = axis_y + AXIS_TICK_LEN + 10.0,
            year = tick.year
        );
    }

    // Y axis: baseline, month name at each band center.
    let _ = writeln!(
        out,
        r#"  <g id="y-axis" stroke="black"><line x1="{x}" y1="{}" x2="{x}" y2="{axis_y}"/></g>"#,
        pad.top,
        x = pad.left
    );
    for tick in &layout.month_ticks {
        let _ = writeln!(
            out,
            r#"  <text x="{tx}" y="{y}" text-anchor="end" dominant-baseline="middle" font-size="10">{label}</text>"#,
            tx = pad.left - AXIS_TICK_LEN,
            y = tick.center,
            label = tick.label
        );
    }
}

fn write_legend(out: &mut String, layout: &ChartLayout, config: &ChartConfig) {
    // Swatch row along the bottom edge, boundary labels under the seams.
    let x0 = config.padding.left;
    let y0 = config.height - LEGEND_SWATCH_HEIGHT - 14.0;

    let _ = writeln!(out, r#"  <g id="legend">"#);
    for (i, color) in layout.legend.colors.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"    <rect x="{x}" y="{y0}" width="{LEGEND_SWATCH_WIDTH}" height="{LEGEND_SWATCH_HEIGHT}" fill="{color}" stroke="black"/>"#,
            x = x0 + i as f64 * LEGEND_SWATCH_WIDTH
        );
    }
    for (i, tick) in layout.legend.ticks.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"    <text x="{x}" y="{y}" text-anchor="middle" font-size="9">{label}</text>"#,
            x = x0 + i as f64 * LEGEND_SWATCH_WIDTH,
            y = y0 + LEGEND_SWATCH_HEIGHT + 10.0,
            label = tick.label
        );
    }
    let _ = writeln!(out, "  </g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatcal_core::dataset::{Dataset, RawDataset, TemperatureRecord};
    use heatcal_core::{project, Palette};

    fn sample_layout() -> (ChartLayout, ChartConfig) {
        let ds = Dataset::from_raw(RawDataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                TemperatureRecord { year: 1753, month: 1, variance: -1.366 },
                TemperatureRecord { year: 1754, month: 2, variance: -2.223 },
            ],
        })
        .unwrap();
        let config = ChartConfig::default();
        let layout = project(&ds, &config, Palette::diverging()).unwrap();
        (layout, config)
    }

    #[test]
    fn document_contains_one_rect_per_cell() {
        let (layout, config) = sample_layout();
        let doc = document(&layout, &config);
        assert_eq!(doc.matches(r#"class="cell""#).count(), 2);
        assert!(doc.contains(r#"data-year="1753""#));
        assert!(doc.contains(r#"data-month="0""#));
        assert!(doc.contains(r#"data-temp="7.3""#));
    }

    #[test]
    fn document_contains_axes_and_legend() {
        let (layout, config) = sample_layout();
        let doc = document(&layout, &config);
        assert!(doc.contains(r#"id="x-axis""#));
        assert!(doc.contains(r#"id="y-axis""#));
        assert!(doc.contains(r#"id="legend""#));
        assert!(doc.contains(">January<"));
        assert!(doc.contains(">December<"));
    }

    #[test]
    fn cell_titles_carry_tooltip_labels() {
        let (layout, config) = sample_layout();
        let doc = document(&layout, &config);
        assert!(doc.contains("<title>1753 - January\n7.3 ℃\n-1.4 ℃</title>"));
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
