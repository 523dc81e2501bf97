pub mod cpu;
pub mod disk_net;
pub mod header;
pub mod layout;
pub mod memory;
pub mod panel;
pub mod processes;
pub mod theme;

use ratatui::Frame;

use crate::ui::layout::RegionTree;

pub fn draw(frame: &mut Frame, regions: &RegionTree) {
    regions.render(frame);
}
