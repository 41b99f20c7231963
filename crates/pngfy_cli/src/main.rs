use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pngfy_render::{
    encode_rgba, ColorUpdate, Pngfyer, RenderMode, RenderOutput, SettingCall, SettingName,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render ASCII text into PNG images with a builtin 5x9 bitmap font")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text to a PNG file
    Render(RenderArgs),
    /// Render text and print the unscaled canvas to stdout
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Text to render; mutually exclusive with --text-file
    text: Option<String>,
    /// Read the text from a file instead
    #[arg(long)]
    text_file: Option<PathBuf>,
    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Text to render; mutually exclusive with --text-file
    text: Option<String>,
    /// Read the text from a file instead
    #[arg(long)]
    text_file: Option<PathBuf>,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Font color as R,G,B or R,G,B,A
    #[arg(long)]
    font_color: Option<String>,
    /// Background color as R,G,B or R,G,B,A
    #[arg(long)]
    background_color: Option<String>,
    /// Font height in pixels, snapped to a multiple of 9
    #[arg(long)]
    font_height: Option<i64>,
    /// Pixels between adjacent glyphs on a line
    #[arg(long)]
    horizontal_spacing: Option<i64>,
    /// Pixels between adjacent lines
    #[arg(long)]
    vertical_spacing: Option<i64>,
    /// Replacement for unsupported text characters
    #[arg(long)]
    replacement: Option<String>,
    /// Fill whole glyph regions instead of drawing glyph bitmaps
    #[arg(long, default_value_t = false)]
    solid: bool,
    /// Generic NAME=VALUE setting override, applied after the typed flags
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => render(args),
        Commands::Preview(args) => preview(args),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let text = resolve_text(args.text.as_deref(), args.text_file)?;
    let output = run_pipeline(&text, &args.settings)?;

    output
        .canvas()
        .save_with_format(&args.output, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {:?}", args.output))?;

    info!(
        "wrote {:?}: canvas {}x{}, render dimensions {}x{}",
        args.output,
        output.canvas().width(),
        output.canvas().height(),
        output.render_width(),
        output.render_height()
    );
    Ok(())
}

fn preview(args: PreviewArgs) -> Result<()> {
    let text = resolve_text(args.text.as_deref(), args.text_file)?;
    let output = run_pipeline(&text, &args.settings)?;

    let background = encode_rgba(output.settings().background_color());
    let canvas = output.canvas();
    for y in 0..canvas.height() {
        let row: String = (0..canvas.width())
            .map(|x| if canvas.get_pixel(x, y) == &background { '.' } else { '#' })
            .collect();
        println!("{}", row);
    }
    Ok(())
}

fn resolve_text(inline: Option<&str>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => bail!("pass either TEXT or --text-file, not both"),
        (Some(text), None) => Ok(text.to_owned()),
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read {:?}", path))
        },
        (None, None) => bail!("no text given; pass TEXT or --text-file"),
    }
}

/// Applies the typed flags, then the generic overrides, then the text, and
/// renders. Text goes last so its dimension checks see the final spacings.
fn run_pipeline(text: &str, settings: &RenderSettings) -> Result<RenderOutput> {
    let mut pngfyer = Pngfyer::new();

    if let Some(spec) = &settings.font_color {
        let effective = pngfyer
            .set_font_color(parse_color_spec(spec)?)
            .context("invalid --font-color")?;
        info!("font color set to {:?}", effective);
    }
    if let Some(spec) = &settings.background_color {
        let effective = pngfyer
            .set_background_color(parse_color_spec(spec)?)
            .context("invalid --background-color")?;
        info!("background color set to {:?}", effective);
    }
    if let Some(desired) = settings.font_height {
        let effective = pngfyer.set_font_height(desired).context("invalid --font-height")?;
        if effective != desired as u32 {
            info!("font height {} snapped to {}", desired, effective);
        }
    }
    if let Some(desired) = settings.horizontal_spacing {
        pngfyer.set_horizontal_spacing(desired).context("invalid --horizontal-spacing")?;
    }
    if let Some(desired) = settings.vertical_spacing {
        pngfyer.set_vertical_spacing(desired).context("invalid --vertical-spacing")?;
    }

    for raw in &settings.overrides {
        let call = parse_override(raw)?;
        pngfyer.apply(call).with_context(|| format!("failed to apply --set {raw}"))?;
    }

    pngfyer
        .set_text(text, settings.replacement.as_deref())
        .context("text was rejected")?;

    let mode = if settings.solid { RenderMode::Solid } else { RenderMode::Glyphs };
    Ok(pngfyer.render_with_mode(mode))
}

/// Parses `R,G,B` or `R,G,B,A` into a partial color update.
fn parse_color_spec(spec: &str) -> Result<ColorUpdate> {
    let channels: Vec<i64> = spec
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .with_context(|| format!("{part:?} is not an integer channel value"))
        })
        .collect::<Result<_>>()?;

    match channels[..] {
        [red, green, blue] => Ok(ColorUpdate::rgb(red, green, blue)),
        [red, green, blue, alpha] => Ok(ColorUpdate::rgba(red, green, blue, alpha)),
        _ => bail!("color must be R,G,B or R,G,B,A, got {spec:?}"),
    }
}

/// Parses a `NAME=VALUE` override into a dynamic setting call. Unknown
/// names are rejected by the library rather than ignored.
fn parse_override(raw: &str) -> Result<SettingCall> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("--set expects NAME=VALUE, got {raw:?}"))?;

    let setting: SettingName = name.parse()?;
    let call = match setting {
        SettingName::FontColor => SettingCall::SetFontColor(parse_color_spec(value)?),
        SettingName::BackgroundColor => SettingCall::SetBackgroundColor(parse_color_spec(value)?),
        SettingName::FontHeight => SettingCall::SetFontHeight(parse_integer(name, value)?),
        SettingName::HorizontalSpacing => {
            SettingCall::SetHorizontalSpacing(parse_integer(name, value)?)
        },
        SettingName::VerticalSpacing => {
            SettingCall::SetVerticalSpacing(parse_integer(name, value)?)
        },
        SettingName::Text => {
            SettingCall::SetText { text: value.to_owned(), replacement: None }
        },
    };
    Ok(call)
}

fn parse_integer(name: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().with_context(|| format!("{value:?} is not a valid integer for {name}"))
}
