use anyhow::{Context, Result};
use clap::Parser as _;
use std::ffi::OsString;
use std::io::Write as _;
use std::path::PathBuf;
use txt2pdf::{convert, ConvertOptions};

/// Convert a plain text file into a PDF laid out on a monospace grid
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArguments {
    /// The text file to convert
    filename: PathBuf,
    /// A built-in font (Courier, Courier-Bold, Courier-Oblique, Courier-BoldOblique)
    /// or the full path of a TrueType font
    #[arg(short = 'f', long = "font", default_value = "Courier")]
    font: String,
    /// Size of the font
    #[arg(short = 's', long = "font-size", default_value_t = 10.0)]
    font_size: f32,
    /// Extra vertical space between lines, as a multiple of the font size
    #[arg(short = 'v', long = "extra-vertical-space", default_value_t = 0.0)]
    extra_vertical_space: f32,
    /// Extra horizontal space between characters
    #[arg(short = 'k', long = "kerning", default_value_t = 0.0)]
    kerning: f32,
    /// Size of the page (A4, A3, Letter, etc.)
    #[arg(short = 'm', long = "media", default_value = "A4")]
    media: String,
    /// Select landscape mode
    #[arg(long = "landscape")]
    landscape: bool,
    /// Left margin (in cm)
    #[arg(short = 'l', long = "margin-left", default_value_t = 2.0)]
    margin_left: f32,
    /// Right margin (in cm)
    #[arg(short = 'r', long = "margin-right", default_value_t = 2.0)]
    margin_right: f32,
    /// Top margin (in cm)
    #[arg(short = 't', long = "margin-top", default_value_t = 2.0)]
    margin_top: f32,
    /// Bottom margin (in cm)
    #[arg(short = 'b', long = "margin-bottom", default_value_t = 2.0)]
    margin_bottom: f32,
    /// Output file
    #[arg(short = 'o', long = "output", default_value = "output.pdf")]
    output: PathBuf,
    /// Author of the PDF document
    #[arg(long = "author")]
    author: Option<String>,
    /// Title of the PDF document
    #[arg(long = "title")]
    title: Option<String>,
    /// Don't print progress and warning messages
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl From<CliArguments> for ConvertOptions {
    fn from(args: CliArguments) -> Self {
        ConvertOptions {
            input: args.filename,
            output: args.output,
            font: args.font,
            font_size: args.font_size,
            extra_vertical_space: args.extra_vertical_space,
            kerning: args.kerning,
            media: args.media,
            landscape: args.landscape,
            margin_left: args.margin_left,
            margin_right: args.margin_right,
            margin_top: args.margin_top,
            margin_bottom: args.margin_bottom,
            author: args.author.unwrap_or_default(),
            title: args.title.unwrap_or_default(),
            quiet: args.quiet,
        }
    }
}

/// `-ls` has always meant landscape, but clap would read it as `-l s`
fn normalize_arguments<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg.to_str() == Some("-ls") {
                OsString::from("--landscape")
            } else {
                arg
            }
        })
        .collect()
}

fn init_logger(quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

fn main() {
    let options: ConvertOptions =
        CliArguments::parse_from(normalize_arguments(std::env::args_os())).into();
    init_logger(options.quiet);

    if let Err(error) = fallible_main(&options) {
        log::error!("{:#}", error);
        std::process::exit(1);
    }
}

fn fallible_main(options: &ConvertOptions) -> Result<()> {
    convert(options).with_context(|| {
        format!(
            "Unable to convert {:?} into {:?}",
            options.input, options.output
        )
    })?;
    Ok(())
}
