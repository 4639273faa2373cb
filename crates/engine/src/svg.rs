//! Serializes a [`HeatmapLayout`] into a standalone SVG document.

use std::fmt::Write;

use crate::format::xml_escape;
use crate::layout::{HeatmapLayout, Rect, TextLabel};

const FONT_STACK: &str = r#"-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif"#;

fn write_text(out: &mut String, label: &TextLabel, class: &str) {
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" class="{class}">{}</text>"#,
        label.x,
        label.y,
        xml_escape(&label.text)
    );
}

fn rect_attrs(rect: &Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}" rx="{}""#,
        rect.x, rect.y, rect.width, rect.height, rect.radius
    )
}

fn write_style(out: &mut String, layout: &HeatmapLayout) {
    let text = xml_escape(&layout.style.text_color);
    let sub = layout.style.sub_color;
    let _ = writeln!(
        out,
        "<style>text{{font-family:{};fill:{text}}}.month{{font-size:10px}}.day{{font-size:10px}}\
.legend-label{{font-size:10px;fill:{sub}}}.total{{font-size:11px;font-weight:600}}\
.stat{{font-size:11px;fill:{sub}}}.stat-val{{font-size:11px;font-weight:600;fill:{text}}}\
.bar-label{{font-size:11px;fill:{sub}}}.bar-val{{font-size:10px;fill:{sub}}}\
.section-title{{font-size:12px;font-weight:600}}</style>",
        xml_escape(FONT_STACK)
    );
}

/// Writes every element of `layout` in stacking order: grid, legend and
/// total line, statistics, weekday distribution.
pub fn to_svg(layout: &HeatmapLayout) -> String {
    let mut out = String::with_capacity(256 + layout.cells.len() * 160);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height
    );
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}" rx="6"/>"#,
        xml_escape(&layout.style.background)
    );
    write_style(&mut out, layout);

    for label in &layout.month_labels {
        write_text(&mut out, label, "month");
    }
    for label in &layout.day_labels {
        write_text(&mut out, label, "day");
    }
    for cell in &layout.cells {
        let title = cell
            .tooltip
            .iter()
            .map(|line| xml_escape(line))
            .collect::<Vec<_>>()
            .join("&#10;");
        let _ = writeln!(
            out,
            r#"<rect {} fill="{}"><title>{title}</title></rect>"#,
            rect_attrs(&cell.rect),
            cell.fill
        );
    }

    write_text(&mut out, &layout.legend.less, "legend-label");
    for swatch in &layout.legend.swatches {
        let _ = writeln!(
            out,
            r#"<rect {} fill="{}"/>"#,
            rect_attrs(&swatch.rect),
            swatch.fill
        );
    }
    write_text(&mut out, &layout.legend.more, "legend-label");
    if let Some(total) = &layout.total_line {
        write_text(&mut out, total, "total");
    }

    if let Some(panel) = &layout.stats_panel {
        let divider = panel.divider;
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            divider.x1, divider.y1, divider.x2, divider.y2, layout.style.divider_color
        );
        for item in &panel.items {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" class="stat">{}: <tspan class="stat-val">{}</tspan>{}</text>"#,
                item.x,
                item.y,
                item.label,
                xml_escape(&item.value),
                xml_escape(&item.suffix)
            );
        }
    }

    if let Some(panel) = &layout.weekday_panel {
        write_text(&mut out, &panel.title, "section-title");
        for bar in &panel.bars {
            write_text(&mut out, &bar.label, "bar-label");
            let _ = writeln!(
                out,
                r#"<rect {} fill="{}" opacity="0.85"/>"#,
                rect_attrs(&bar.rect),
                bar.fill
            );
            write_text(&mut out, &bar.value, "bar-val");
        }
    }

    out.push_str("</svg>");
    out
}
