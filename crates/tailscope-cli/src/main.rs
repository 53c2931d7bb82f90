use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;
use tailscope_engine::{Converter, ConverterConfig, GridOverflow};
use tailscope_style::{ElementGeometry, StyleSnapshot};

#[derive(Parser)]
#[command(name = "tailscope")]
#[command(about = "Tailscope: computed CSS styles to utility classes")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a style snapshot to a class string
    Convert {
        /// Snapshot file: a JSON object, or CSS declarations for any other extension
        path: String,

        #[command(flatten)]
        element: ElementArgs,

        /// Print `{ "classes": ... }` as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the derived label rows for a style snapshot
    Inspect {
        /// Snapshot file: a JSON object, or CSS declarations for any other extension
        path: String,

        #[command(flatten)]
        element: ElementArgs,

        /// Element tag name
        #[arg(long, default_value = "div")]
        tag: String,

        /// Image URL for `<img>` elements
        #[arg(long)]
        src: Option<String>,

        /// Print the inspection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a resolved color value to hex
    Color {
        /// Color value, e.g. "rgb(59, 130, 246)"
        value: String,
    },
}

#[derive(clap::Args)]
struct ElementArgs {
    /// Element width in pixels
    #[arg(long, default_value_t = 0.0)]
    width: f64,

    /// Element height in pixels
    #[arg(long, default_value_t = 0.0)]
    height: f64,

    /// Handling of grid track counts outside the utility range
    #[arg(long, value_enum, default_value_t = GridFallback::Drop)]
    grid_fallback: GridFallback,
}

#[derive(Clone, Copy, ValueEnum)]
enum GridFallback {
    Drop,
    Arbitrary,
}

impl ElementArgs {
    fn geometry(&self) -> ElementGeometry {
        ElementGeometry::new(self.width.max(0.0), self.height.max(0.0))
    }

    fn converter(&self) -> Converter {
        let grid_overflow = match self.grid_fallback {
            GridFallback::Drop => GridOverflow::Drop,
            GridFallback::Arbitrary => GridOverflow::Arbitrary,
        };
        Converter::new(ConverterConfig { grid_overflow })
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Command::Convert {
            path,
            element,
            json,
        } => cmd_convert(&path, &element, json),
        Command::Inspect {
            path,
            element,
            tag,
            src,
            json,
        } => cmd_inspect(&path, &element, &tag, src.as_deref(), json),
        Command::Color { value } => cmd_color(&value),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn read_snapshot(path: &str) -> StyleSnapshot {
    let source = read_source(path);
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let snapshot = if is_json {
        serde_json::from_str::<StyleSnapshot>(&source).map_err(|e| e.to_string())
    } else {
        StyleSnapshot::from_declarations(&source).map_err(|e| e.to_string())
    };

    match snapshot {
        Ok(snapshot) => {
            log::debug!("read {} properties from {path}", snapshot.len());
            snapshot
        }
        Err(e) => {
            eprintln!("Snapshot error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error encoding JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_convert(path: &str, element: &ElementArgs, json: bool) {
    let snapshot = read_snapshot(path);
    let classes = element.converter().convert(&snapshot, element.geometry());

    if json {
        print_json(&serde_json::json!({ "classes": classes }));
        return;
    }
    if classes.is_empty() {
        eprintln!("No styles detected");
        return;
    }
    println!("{classes}");
}

fn cmd_inspect(path: &str, element: &ElementArgs, tag: &str, src: Option<&str>, json: bool) {
    let snapshot = read_snapshot(path);
    let inspection = element
        .converter()
        .inspect(&snapshot, element.geometry(), tag, src);

    if json {
        print_json(&inspection);
        return;
    }

    if inspection.classes.is_empty() {
        eprintln!("No styles detected");
    } else {
        println!("{}", inspection.classes);
    }
    let width = inspection
        .rows
        .iter()
        .map(|row| row.label.len())
        .max()
        .unwrap_or(0);
    for row in &inspection.rows {
        match &row.copy {
            Some(copy) => println!("  {:<width$}  {}  [{copy}]", row.label, row.value),
            None => println!("  {:<width$}  {}", row.label, row.value),
        }
    }
}

fn cmd_color(value: &str) {
    println!("{}", tailscope_style::normalize_color(value));
}
