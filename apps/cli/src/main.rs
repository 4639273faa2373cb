mod args;
mod config;
mod dirs;

use std::io::{self, Write};

use heatmap_app::{AppConfig, AppState};
use http_api::HttpState;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use args::{Command, RenderArgs, ServeArgs, SourceArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let command = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    match command {
        Command::Help => {
            args::print_help();
            Ok(())
        }
        Command::Render(render) => run_render(render),
        Command::Serve(serve) => run_serve(serve).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn build_state(source: &SourceArgs) -> Result<(AppState, config::CliConfig), io::Error> {
    let loaded = config::load(source.config.as_deref()).map_err(io::Error::other)?;
    if loaded.created {
        tracing::info!(path = %loaded.file.display(), "created default config");
    } else {
        tracing::debug!(path = %loaded.file.display(), "loaded config");
    }

    let data_path = source
        .data
        .clone()
        .unwrap_or_else(|| loaded.config.data_path.clone());
    let state = AppState::with_config(AppConfig {
        data_path,
        heatmap: loaded.config.heatmap.clone(),
        requantize: source.requantize,
    });
    Ok((state, loaded.config))
}

fn run_render(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = build_state(&args.source)?;
    let svg = state
        .render_svg(&args.params)
        .map_err(|err| io::Error::other(err.to_string()))?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &svg)?;
            tracing::info!(path = %path.display(), bytes = svg.len(), "wrote heatmap");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (state, config) = build_state(&args.source)?;
    let bound = http_api::bind(args.port.unwrap_or(config.port)).await?;
    http_api::serve(HttpState::new(state), bound, async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutting down");
    })
    .await?;
    Ok(())
}
