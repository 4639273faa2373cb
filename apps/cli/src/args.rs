use std::env;
use std::path::PathBuf;

use heatmap_app::RenderParams;

#[derive(Debug, Default)]
pub struct SourceArgs {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub requantize: bool,
}

#[derive(Debug, Default)]
pub struct RenderArgs {
    pub source: SourceArgs,
    pub out: Option<PathBuf>,
    pub params: RenderParams,
}

#[derive(Debug, Default)]
pub struct ServeArgs {
    pub source: SourceArgs,
    pub port: Option<u16>,
}

#[derive(Debug)]
pub enum Command {
    Render(RenderArgs),
    Serve(ServeArgs),
    Help,
}

pub fn parse_args() -> Result<Command, String> {
    parse_from(env::args().skip(1))
}

fn take_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_source_flag<I: Iterator<Item = String>>(
    flag: &str,
    args: &mut I,
    source: &mut SourceArgs,
) -> Result<bool, String> {
    match flag {
        "--data" => source.data = Some(PathBuf::from(take_value(args, flag)?)),
        "--config" => source.config = Some(PathBuf::from(take_value(args, flag)?)),
        "--requantize" => source.requantize = true,
        _ => return Ok(false),
    }
    Ok(true)
}

pub fn parse_from<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        Some("render") => "render",
        Some("serve") => "serve",
        Some("--help" | "-h" | "help") | None => return Ok(Command::Help),
        Some(other) => return Err(format!("unknown command: {other}")),
    };

    if command == "serve" {
        let mut parsed = ServeArgs::default();
        while let Some(arg) = args.next() {
            if parse_source_flag(&arg, &mut args, &mut parsed.source)? {
                continue;
            }
            match arg.as_str() {
                "--port" => {
                    let value = take_value(&mut args, "--port")?;
                    let port = value
                        .parse::<u16>()
                        .map_err(|_| format!("invalid port value: {value}"))?;
                    parsed.port = Some(port);
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(format!("unknown argument: {arg}")),
            }
        }
        return Ok(Command::Serve(parsed));
    }

    let mut parsed = RenderArgs::default();
    while let Some(arg) = args.next() {
        if parse_source_flag(&arg, &mut args, &mut parsed.source)? {
            continue;
        }
        let params = &mut parsed.params;
        match arg.as_str() {
            "--out" | "-o" => parsed.out = Some(PathBuf::from(take_value(&mut args, &arg)?)),
            "--theme" => params.theme = Some(take_value(&mut args, &arg)?),
            "--scheme" => params.color_scheme = Some(take_value(&mut args, &arg)?),
            "--start" => params.start = Some(take_value(&mut args, &arg)?),
            "--end" => params.end = Some(take_value(&mut args, &arg)?),
            "--block-size" => params.block_size = Some(take_value(&mut args, &arg)?),
            "--block-margin" => params.block_margin = Some(take_value(&mut args, &arg)?),
            "--block-radius" => params.block_radius = Some(take_value(&mut args, &arg)?),
            "--week-start" => params.week_start = Some(take_value(&mut args, &arg)?),
            "--bg" => params.bg = Some(take_value(&mut args, &arg)?),
            "--text-color" => params.text_color = Some(take_value(&mut args, &arg)?),
            "--no-stats" => params.stats = Some("false".to_string()),
            "--no-weekday" => params.weekday = Some("false".to_string()),
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(format!("unknown argument: {arg}")),
        }
    }
    Ok(Command::Render(parsed))
}

pub fn print_help() {
    println!(
        "Usage Heatmap\n\n\
Usage:\n  usage-heatmap render [options]\n  usage-heatmap serve [--port <port>] [--data <path>] [--config <path>]\n\n\
Source options:\n  --data <path>        Activity series JSON (default from config, then ./data.json)\n  --config <path>      Config file (.toml, or a .json heatmap config)\n  --requantize         Recompute color levels from cost\n\n\
Render options:\n  -o, --out <path>     Write the SVG here instead of stdout\n  --theme <name>       light, dark, blue, orange or pink\n  --scheme <scheme>    light or dark\n  --start <date>       First day to include (YYYY-MM-DD)\n  --end <date>         Last day to include (YYYY-MM-DD)\n  --block-size <px>    Cell edge length\n  --block-margin <px>  Gap between cells\n  --block-radius <px>  Cell corner radius\n  --week-start <0-6>   Weekday that opens a week, 0 = Sunday\n  --bg <color>         Background color\n  --text-color <color> Text color\n  --no-stats           Hide the statistics panel\n  --no-weekday         Hide the weekday distribution\n\n\
Serve options:\n  --port <port>        Override the configured port for this run only\n"
    );
}
