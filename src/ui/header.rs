use crate::system::snapshot::HostSnapshot;
use crate::ui::panel::{Cell, Panel, PanelBody};
use crate::ui::theme::{BorderTone, label_style};

pub const TITLE: &str = "System Monitor";

pub fn build(host: &HostSnapshot) -> Panel {
    let separator = || Cell::plain(" | ");
    let line = vec![
        Cell::styled("System: ", label_style()),
        Cell::plain(format!("{} {}", host.system, host.release)),
        separator(),
        Cell::styled("Node: ", label_style()),
        Cell::plain(host.node.as_str()),
        separator(),
        Cell::styled("Arch: ", label_style()),
        Cell::plain(host.arch.as_str()),
    ];

    Panel {
        title: TITLE.to_string(),
        border: BorderTone::Green,
        body: PanelBody::Lines(vec![line]),
    }
}
