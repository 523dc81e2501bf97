use ratatui::layout::Constraint;

use crate::config::PanelsConfig;
use crate::format::classify;
use crate::system::snapshot::CpuSnapshot;
use crate::ui::panel::{Cell, Column, Panel, PanelBody};
use crate::ui::theme::{BorderTone, severity_style};

const BAR_GLYPH: &str = "\u{2501}";
const PERCENT_PER_GLYPH: f32 = 5.0;

/// One glyph per started 5% of load, rounded down.
pub fn usage_bar(percent: f32) -> String {
    let glyphs = (percent.max(0.0) / PERCENT_PER_GLYPH).floor() as usize;
    BAR_GLYPH.repeat(glyphs)
}

fn usage_cell(percent: f32) -> Cell {
    Cell::styled(
        format!("{} {percent:.1}%", usage_bar(percent)),
        severity_style(classify(percent)),
    )
}

pub fn build(cpu: &CpuSnapshot, config: &PanelsConfig) -> Panel {
    let mut rows = vec![
        vec![Cell::bold("Total"), usage_cell(cpu.aggregate)],
        vec![Cell::empty(), Cell::empty()],
    ];

    rows.extend(
        cpu.per_core
            .iter()
            .take(config.max_core_rows)
            .enumerate()
            .map(|(i, &percent)| vec![Cell::plain(format!("Core {i}")), usage_cell(percent)]),
    );

    let hidden = cpu.core_count().saturating_sub(config.max_core_rows);
    if hidden > 0 {
        rows.push(vec![
            Cell::plain("..."),
            Cell::plain(format!("+{hidden} more cores")),
        ]);
    }

    Panel {
        title: format!("CPU ({} cores)", cpu.core_count()),
        border: BorderTone::Blue,
        body: PanelBody::Table {
            columns: vec![
                Column::right(Constraint::Length(8)),
                Column::left(Constraint::Min(0)),
            ],
            header: None,
            rows,
        },
    }
}
