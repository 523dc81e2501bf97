use crate::format::humanize_bytes;
use crate::system::snapshot::{DiskSnapshot, NetworkSnapshot};
use crate::ui::panel::{Cell, Panel, PanelBody};
use crate::ui::theme::BorderTone;

pub const TITLE: &str = "Disk & Network";

/// Disk usage of one mount point next to lifetime network counters.
pub fn build(disk: &DiskSnapshot, net: &NetworkSnapshot) -> Panel {
    let lines = vec![
        vec![Cell::bold(format!("Disk ({})", disk.mount_point.display()))],
        vec![Cell::plain(format!("Total: {}", humanize_bytes(disk.total)))],
        vec![Cell::plain(format!(
            "Used:  {} ({:.1}%)",
            humanize_bytes(disk.used),
            disk.used_percent
        ))],
        vec![Cell::empty()],
        vec![Cell::bold("Network (total)")],
        vec![Cell::plain(format!("Sent:     {}", humanize_bytes(net.bytes_sent)))],
        vec![Cell::plain(format!(
            "Received: {}",
            humanize_bytes(net.bytes_received)
        ))],
    ];

    Panel {
        title: TITLE.to_string(),
        border: BorderTone::Cyan,
        body: PanelBody::Lines(lines),
    }
}
