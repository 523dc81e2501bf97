use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::ui::panel::Panel;

const HEADER_HEIGHT: u16 = 3;

/// Named slot in the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Cpu,
    Memory,
    DiskNet,
    Processes,
}

impl Region {
    /// Binding and painting order.
    pub const ALL: [Region; 5] = [
        Region::Header,
        Region::Cpu,
        Region::Memory,
        Region::DiskNet,
        Region::Processes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Cpu => "cpu",
            Region::Memory => "memory",
            Region::DiskNet => "disk_net",
            Region::Processes => "processes",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// The fixed region tree: a header strip over a body split 1:2 into a
/// hardware column (CPU, memory, disk+network stacked evenly) and a process
/// column. Geometry is decided here once; only slot contents change.
#[derive(Debug, Clone)]
pub struct RegionTree {
    root: Layout,
    body: Layout,
    hardware: Layout,
    slots: [Option<Panel>; 5],
}

impl Default for RegionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionTree {
    pub fn new() -> Self {
        RegionTree {
            root: Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]),
            body: Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]),
            hardware: Layout::vertical([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ]),
            slots: Default::default(),
        }
    }

    /// Replaces whatever panel the region held.
    pub fn bind(&mut self, region: Region, panel: Panel) {
        self.slots[region.slot()] = Some(panel);
    }

    pub fn panel(&self, region: Region) -> Option<&Panel> {
        self.slots[region.slot()].as_ref()
    }

    pub fn is_fully_bound(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Rectangles for every region, in `Region::ALL` order.
    pub fn areas(&self, area: Rect) -> [Rect; 5] {
        let [header, body] = self.root.areas(area);
        let [hardware, processes] = self.body.areas(body);
        let [cpu, memory, disk_net] = self.hardware.areas(hardware);
        [header, cpu, memory, disk_net, processes]
    }

    /// Paints every bound region into one frame.
    pub fn render(&self, frame: &mut Frame) {
        let areas = self.areas(frame.area());
        for region in Region::ALL {
            if let Some(panel) = self.panel(region) {
                panel.render(frame, areas[region.slot()]);
            }
        }
    }
}
