use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::config::Config;
use crate::event::{Event, EventHandler};
use crate::system::collector::MetricsSource;
use crate::ui::layout::{Region, RegionTree};
use crate::ui::panel::Panel;
use crate::ui::{self, cpu, disk_net, header, memory, processes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Starting,
    Running,
    Stopped,
}

/// Why the refresh loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// Ctrl+C, either as SIGINT or as a raw-mode key press.
    Interrupted,
    /// The terminal input stream went away underneath the dashboard.
    InputClosed,
}

/// The refresh driver: owns the metrics source and the region tree, and turns
/// one tick into one bound set of panels.
pub struct App<S> {
    pub state: RunState,
    source: S,
    regions: RegionTree,
    config: Config,
    ticks: u64,
}

impl<S: MetricsSource> App<S> {
    pub fn new(source: S, config: Config) -> Self {
        App {
            state: RunState::Starting,
            source,
            regions: RegionTree::new(),
            config,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn regions(&self) -> &RegionTree {
        &self.regions
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self) {
        if self.state == RunState::Starting {
            self.state = RunState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Samples every domain and binds the resulting panels, always in
    /// header, CPU, memory, disk/network, processes order. A domain whose read
    /// fails gets a placeholder panel; the others are unaffected.
    pub fn refresh_data(&mut self) {
        #[cfg(feature = "trace-capture")]
        let _span = tracing::debug_span!("app.refresh_data", tick = self.ticks).entered();

        let panel = self
            .source
            .read_host()
            .wrap_err("reading host identity")
            .map(|host| header::build(&host));
        self.bind(Region::Header, header::TITLE, panel);

        let panel = self
            .source
            .read_cpu()
            .wrap_err("sampling CPU usage")
            .map(|snapshot| cpu::build(&snapshot, &self.config.panels));
        self.bind(Region::Cpu, "CPU", panel);

        let panel = self
            .source
            .read_memory()
            .wrap_err("reading memory usage")
            .map(|snapshot| memory::build(&snapshot));
        self.bind(Region::Memory, "Memory", panel);

        let panel = self.read_disk_net();
        self.bind(Region::DiskNet, disk_net::TITLE, panel);

        let panel = self
            .source
            .list_processes()
            .wrap_err("listing processes")
            .map(|snapshot| processes::build(&snapshot, &self.config.panels));
        self.bind(Region::Processes, processes::TITLE, panel);

        self.ticks += 1;
    }

    fn read_disk_net(&mut self) -> Result<Panel> {
        let disk = self
            .source
            .read_disk(&self.config.panels.disk_mount_point)
            .wrap_err("reading disk usage")?;
        let net = self
            .source
            .read_network()
            .wrap_err("reading network counters")?;
        Ok(disk_net::build(&disk, &net))
    }

    fn bind(&mut self, region: Region, title: &str, panel: Result<Panel>) {
        let panel = panel.unwrap_or_else(|err| {
            #[cfg(feature = "trace-capture")]
            tracing::warn!(region = region.name(), error = %err, "metrics read failed");
            Panel::unavailable(title, &err)
        });
        self.regions.bind(region, panel);
    }

    /// Paints the current region contents as one frame.
    pub fn repaint<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        #[cfg(feature = "trace-capture")]
        let _span = tracing::debug_span!("app.repaint").entered();

        terminal
            .draw(|frame| ui::draw(frame, &self.regions))
            .map_err(|e| eyre!("failed to paint frame: {e}"))?;
        Ok(())
    }

    /// One full tick: sample, bind, then a single repaint.
    pub fn tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.refresh_data();
        self.repaint(terminal)
    }

    /// Drives ticks and repaints until the first interrupt or until terminal
    /// input closes. Events queued behind the stopping one are left unread.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<Shutdown> {
        self.start();

        let shutdown = loop {
            match events.next().await {
                Some(Event::Tick) => self.tick(terminal)?,
                Some(Event::Resize) => {
                    // Nothing to repaint until the first tick has bound every region.
                    if self.regions.is_fully_bound() {
                        self.repaint(terminal)?;
                    }
                }
                Some(Event::Interrupt) => break Shutdown::Interrupted,
                Some(Event::InputClosed) | None => break Shutdown::InputClosed,
            }
        };

        #[cfg(feature = "trace-capture")]
        tracing::info!(?shutdown, ticks = self.ticks, "refresh loop stopped");
        self.stop();
        Ok(shutdown)
    }
}
