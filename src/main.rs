use clap::Parser;
use clinicq::{app::App, cli::Cli, logging};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }

    let app = App::new(args)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;

    ratatui::restore();
    result
}
