use ratatui::layout::Constraint;
use ratatui::style::Style;

use crate::config::PanelsConfig;
use crate::format::truncate_unicode;
use crate::system::process::rank_by_cpu;
use crate::system::snapshot::ProcessSnapshot;
use crate::ui::panel::{Cell, Column, Panel, PanelBody};
use crate::ui::theme::{BorderTone, CPU_SHARE_COLOR, NAME_COLOR, OWNER_COLOR, PID_COLOR};

pub const TITLE: &str = "Top Processes (CPU)";

const UNKNOWN_OWNER: &str = "?";

pub fn build(snapshot: &ProcessSnapshot, config: &PanelsConfig) -> Panel {
    let top = rank_by_cpu(&snapshot.records, config.max_processes);

    let rows = top
        .iter()
        .map(|p| {
            vec![
                Cell::styled(p.pid.to_string(), Style::default().fg(PID_COLOR)),
                Cell::styled(
                    truncate_unicode(&p.name, config.process_name_width),
                    Style::default().fg(NAME_COLOR),
                ),
                Cell::styled(
                    p.owner.as_deref().unwrap_or(UNKNOWN_OWNER),
                    Style::default().fg(OWNER_COLOR),
                ),
                Cell::styled(
                    format!("{:.1}", p.cpu_share.unwrap_or_default()),
                    Style::default().fg(CPU_SHARE_COLOR),
                ),
            ]
        })
        .collect();

    Panel {
        title: TITLE.to_string(),
        border: BorderTone::White,
        body: PanelBody::Table {
            columns: vec![
                Column::right(Constraint::Length(7)),
                Column::left(Constraint::Min(12)),
                Column::left(Constraint::Length(14)),
                Column::right(Constraint::Length(6)),
            ],
            header: Some(vec![
                Cell::plain("PID"),
                Cell::plain("Name"),
                Cell::plain("User"),
                Cell::plain("CPU %"),
            ]),
            rows,
        },
    }
}
