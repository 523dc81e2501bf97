use ratatui::layout::Constraint;

use crate::format::{classify, humanize_bytes};
use crate::system::snapshot::MemorySnapshot;
use crate::ui::panel::{Cell, Column, Panel, PanelBody};
use crate::ui::theme::{BorderTone, severity_style};

pub fn build(mem: &MemorySnapshot) -> Panel {
    let rows = vec![
        vec![Cell::plain("RAM Total"), Cell::plain(humanize_bytes(mem.total))],
        vec![
            Cell::plain("RAM Used"),
            Cell::styled(
                format!("{} ({:.1}%)", humanize_bytes(mem.used), mem.used_percent),
                severity_style(classify(mem.used_percent)),
            ),
        ],
        vec![Cell::plain("RAM Avail"), Cell::plain(humanize_bytes(mem.available))],
        vec![Cell::empty(), Cell::empty()],
        // Swap is shown without load coloring.
        vec![
            Cell::plain("Swap Used"),
            Cell::plain(format!(
                "{} ({:.1}%)",
                humanize_bytes(mem.swap_used),
                mem.swap_percent
            )),
        ],
    ];

    Panel {
        title: "Memory".to_string(),
        border: BorderTone::Magenta,
        body: PanelBody::Table {
            columns: vec![
                Column::left(Constraint::Length(10)),
                Column::left(Constraint::Min(0)),
            ],
            header: None,
            rows,
        },
    }
}
