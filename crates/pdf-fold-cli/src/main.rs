use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_fold::{
    FormatDefinition, FormatRegistry, GuideMarks, ImpositionOptions, ImpositionStatistics,
    Imposer, PageRange, ProgressSink, ProgressUpdate, SheetMargins,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "pdfold", about = "Impose PDF pages for folding and binding", version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available formats
    Formats,

    /// Show where every page lands without touching a PDF
    Plan {
        /// Format id
        #[arg(short, long)]
        format: String,

        /// Source page count
        #[arg(short, long)]
        pages: usize,
    },

    /// Impose a PDF
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Format id (see `pdfold formats`)
        #[arg(short, long)]
        format: Option<String>,

        /// Output paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Sheet margin in mm (uniform on all sides)
        #[arg(long)]
        margin: Option<f32>,

        /// Draw fold lines
        #[arg(long)]
        fold_lines: bool,

        /// Draw cut lines
        #[arg(long)]
        cut_lines: bool,

        /// Load options from a JSON file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the resolved options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<PaperArg> for pdf_fold::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("pdf_fold")
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logging")
}

fn describe_range(range: PageRange) -> String {
    match range.max {
        Some(max) => format!("{}-{} pages", range.min, max),
        None => format!("{}+ pages", range.min),
    }
}

fn print_format(format: &FormatDefinition) {
    println!("{} ({})", format.id, format.name);
    println!("  {}", format.description);
    println!("  Accepts: {}", describe_range(format.pages));
    println!("  {}", format.print_instructions);
}

fn print_statistics(stats: &ImpositionStatistics) {
    println!("Imposition Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Padded pages: {}", stats.padded_pages);
    println!("  Blank slots: {}", stats.blank_slots);
    println!("  Sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let registry = FormatRegistry::builtin();

    match cli.command {
        Commands::Formats => {
            for format in registry.iter() {
                print_format(format);
                println!();
            }
        }

        Commands::Plan { format, pages } => {
            let format = registry.get(&format)?;
            let plan = format.compute_plan(pages)?;
            print!("{}", pdf_fold::describe_plan(&plan));
            println!();
            print_statistics(&pdf_fold::plan_statistics(&format.id, &plan));
        }

        Commands::Impose {
            input,
            output,
            format,
            paper,
            margin,
            fold_lines,
            cut_lines,
            config,
            save_config,
        } => {
            let mut options = match &config {
                Some(path) => ImpositionOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => ImpositionOptions::default(),
            };
            if let Some(format) = format {
                options.format = format;
            }
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            if let Some(margin) = margin {
                options.margins = SheetMargins::uniform(margin);
            }
            options.guides = GuideMarks {
                fold_lines: options.guides.fold_lines || fold_lines,
                cut_lines: options.guides.cut_lines || cut_lines,
            };
            options.validate()?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                println!("Saved options → {}", path.display());
            }

            let imposer = Imposer::with_registry(registry, options);
            let format = imposer.format()?.clone();

            let sink: Arc<dyn ProgressSink> = Arc::new(|update: &ProgressUpdate| {
                println!("[{:>3}%] {}: {}", update.percent, update.stage, update.message);
            });
            imposer
                .impose_file(&input, &output, Some(sink))
                .await
                .with_context(|| format!("Failed to impose {}", input.display()))?;

            println!("Imposed → {}", output.display());
            println!();
            println!("{}", format.print_instructions);
        }
    }

    Ok(())
}
