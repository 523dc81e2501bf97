use std::io::stdout;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use hostwatch::app::{App, Shutdown};
use hostwatch::config::Config;
use hostwatch::event::{EventHandler, StartupOutcome};
use hostwatch::screen::ScreenGuard;
use hostwatch::system::collector::SysinfoCollector;

/// Takes no arguments: runs until interrupted with Ctrl+C.
#[derive(Parser)]
#[command(
    name = "hostwatch",
    version,
    about = "Live terminal dashboard for CPU, memory, disk, network and processes"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();

    #[cfg(feature = "trace-capture")]
    hostwatch::telemetry::init_tracing_json(&hostwatch::telemetry::default_trace_path())?;

    let config = Config::default();
    let startup_pause = config.general.startup_pause;
    let refresh_interval = config.general.refresh_interval;

    let mut events = EventHandler::new();
    events.listen_for_interrupts();
    // Let the listener task install the SIGINT handler before anything is shown.
    tokio::task::yield_now().await;

    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Starting system monitor...".green().bold());
    let mut app = App::new(SysinfoCollector::new(), config);

    if events.startup_pause(startup_pause).await == StartupOutcome::Interrupted {
        print_farewell();
        return Ok(());
    }

    let result = {
        let mut screen = ScreenGuard::acquire()?;
        events.start(refresh_interval);
        app.run(screen.terminal(), &mut events).await
    };

    // The screen guard is gone here, so reports print to the normal screen.
    match result? {
        Shutdown::Interrupted => {
            print_farewell();
            Ok(())
        }
        Shutdown::InputClosed => Err(eyre!("terminal input closed, monitor stopped")),
    }
}

fn print_farewell() {
    println!("\n{}", "Monitor stopped by user.".red());
}
