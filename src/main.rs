use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use placard::export::decode_image;
use placard::fs::{DirectoryDownloads, FilePrintTarget};
use placard::traits::StaticRasterizer;
use placard::{Catalog, CliError, Studio, StudioBuilder, StudioConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Compose announcements from saved documents and export them.
#[derive(Parser, Debug)]
#[command(name = "placard", version, about)]
struct Cli {
    /// Studio config (JSON). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use this date (YYYY-MM-DD) instead of today for filenames and defaults.
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries.
    List {
        #[arg(value_enum)]
        registry: Registry,
    },
    /// Render a saved document to a standalone HTML page.
    Render {
        document: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Write the printable HTML of a saved document.
    Print {
        document: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Import a saved document and write it back with every field filled in.
    Normalize {
        document: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a saved document. PNG and PDF need an already captured image.
    Export {
        document: PathBuf,
        #[arg(value_enum)]
        format: Format,
        /// The preview capture (PNG, JPEG or GIF).
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Registry {
    Templates,
    Layouts,
    Themes,
    Presets,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Png,
    Pdf,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let builder = builder(cli.config.as_deref(), cli.date.as_deref())?;

    match cli.command {
        Command::List { registry } => {
            let catalog: Arc<Catalog> = Catalog::builtin().map_err(placard::StudioError::from)?;
            list(&catalog, registry);
        }
        Command::Render { document, output } => {
            let studio = load(builder, &document)?;
            fs::write(&output, studio.page().to_html())?;
            println!("Rendered {}", output.display());
        }
        Command::Print { document, output } => {
            let builder = builder.with_print_target(FilePrintTarget::new(&output));
            let mut studio = load(builder, &document)?;
            studio.print()?;
            println!("Wrote printable document {}", output.display());
        }
        Command::Normalize { document, output } => {
            let studio = load(builder, &document)?;
            let json = studio.snapshot_json()?;
            match output {
                Some(path) => fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
        Command::Export { document, format, image, out_dir } => {
            let mut builder = builder.with_downloads(DirectoryDownloads::new(&out_dir)?);
            if let Some(image) = image {
                let capture = decode_image(&fs::read(&image)?)?;
                builder = builder.with_rasterizer(StaticRasterizer::new(capture));
            }
            let mut studio = load(builder, &document)?;
            let download = match format {
                Format::Png => studio.export_png()?,
                Format::Pdf => studio.export_pdf()?,
                Format::Json => studio.export_json()?,
            };
            println!("Wrote {}", out_dir.join(download.filename).display());
        }
    }
    Ok(())
}

fn builder(config: Option<&Path>, date: Option<&str>) -> Result<StudioBuilder, CliError> {
    let config = match config {
        Some(path) => StudioConfig::from_json(&fs::read_to_string(path)?)?,
        None => StudioConfig::default(),
    };
    let mut builder = Studio::builder().with_config(config);
    if let Some(date) = date {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| CliError::InvalidDate(date.to_string()))?;
        let noon = day
            .and_hms_opt(12, 0, 0)
            .ok_or_else(|| CliError::InvalidDate(date.to_string()))?;
        let fixed = Utc.from_utc_datetime(&noon);
        builder = builder.with_clock(move || fixed);
    }
    Ok(builder)
}

fn load(builder: StudioBuilder, document: &Path) -> Result<Studio, CliError> {
    let json = fs::read_to_string(document)?;
    let mut studio = builder.build()?;
    studio.import_json(&json)?;
    log::info!("Loaded {}", document.display());
    Ok(studio)
}

fn list(catalog: &Catalog, registry: Registry) {
    let lines: Vec<String> = match registry {
        Registry::Templates => catalog
            .templates()
            .iter()
            .map(|t| {
                let fonts = t.fonts.families().iter().join(", ");
                let premium = if t.premium { " [premium]" } else { "" };
                format!("{:<14} {:<14} {}{}", t.id.as_str(), t.name, fonts, premium)
            })
            .collect(),
        Registry::Layouts => catalog
            .layouts()
            .iter()
            .map(|l| {
                let premium = if l.premium { " [premium]" } else { "" };
                format!("{:<10} {:<10} {:?}{}", l.id.as_str(), l.name, l.arrangement, premium)
            })
            .collect(),
        Registry::Themes => catalog
            .themes()
            .iter()
            .map(|t| {
                let colors = t.colors.roles().iter().map(|(_, c)| c.to_hex()).join(" ");
                format!("{:<14} {:<16} {}", t.id.as_str(), t.name, colors)
            })
            .collect(),
        Registry::Presets => catalog
            .presets()
            .iter()
            .map(|p| format!("{:<12} {}", p.id.as_str(), p.title))
            .collect(),
    };
    for line in lines {
        println!("{}", line);
    }
}
