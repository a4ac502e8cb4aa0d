use backend::{Demo, DemoConfig, System};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut system = System::new()?;
    let mut demo = Demo::open(&system, config)?;

    'main: loop {
        for event in system.process_io_events() {
            if !demo.handle_event(event) {
                break 'main;
            }
        }

        demo.render();

        if demo.all_hidden() {
            info!("all windows closed");
            break;
        }
    }

    demo.free();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match DemoConfig::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration failure: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Demo failure: {e}");
            ExitCode::FAILURE
        }
    }
}
