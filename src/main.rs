use boatr::app::App;
use boatr::config::Config;
use boatr::render::TerminalRenderer;
use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(version, about = "Terminal-based riverside scene with an animated boat", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        help = "Start the scene at night (lit windows, moon, boat light)"
    )]
    night: bool,

    #[arg(
        short,
        long,
        value_name = "MS",
        help = "Animation tick interval in milliseconds (default 20)"
    )]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("\nContinuing with default settings");
            eprintln!("\nTo customize, create a config file at:");
            eprintln!("  $XDG_CONFIG_HOME/boatr/config.toml");
            eprintln!("  or ~/.config/boatr/config.toml");
            eprintln!("\nExample config.toml:");
            eprintln!("  [scene]");
            eprintln!("  night = true");
            eprintln!();
            Config::default()
        }
    };

    if cli.night {
        config.scene.night = true;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.animation.tick_ms = tick_ms;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid settings: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
    }

    let mut renderer = TerminalRenderer::new()?;
    renderer.init()?;

    let mut app = App::new(&config);

    let result = app.run(&mut renderer).await;

    renderer.cleanup()?;

    result
}
