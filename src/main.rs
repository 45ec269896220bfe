use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use grid_gen::layout::Margins;
use grid_gen::pagesize::{self, PageOrientation, PageSize};
use grid_gen::{
    parse_unit, Colour, Document, Font, GridConfig, GridStyle, Info, LabelStyle, Page, Pt,
    TableConfig,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grid-gen",
    about = "Generates printable coordinate-grid and table PDFs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Orientation {
    Portrait,
    Landscape,
    /// A 500x500 pt square page
    Square,
}

impl Orientation {
    fn page_size(self) -> PageSize {
        match self {
            Orientation::Portrait => pagesize::A4.portrait(),
            Orientation::Landscape => pagesize::A4.landscape(),
            Orientation::Square => pagesize::SQUARE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Labels {
    /// Fractions over the unit's own denominator
    FractionFixed,
    /// Best rational approximations with a bounded denominator
    FractionBest,
    /// Two-digit decimals
    Decimal,
}

impl From<Labels> for LabelStyle {
    fn from(labels: Labels) -> LabelStyle {
        match labels {
            Labels::FractionFixed => LabelStyle::FractionFixed,
            Labels::FractionBest => LabelStyle::FractionBest,
            Labels::Decimal => LabelStyle::Decimal,
        }
    }
}

#[derive(Args)]
struct PageArgs {
    /// Page orientation
    #[arg(long, value_enum, default_value_t = Orientation::Portrait)]
    orientation: Orientation,

    /// Page background colour, as a hex triplet
    #[arg(long, default_value = "#000000")]
    background: Colour,

    /// Inset all content by a 40 pt margin
    #[arg(long)]
    margins: bool,

    /// Header text centred at the top of the page
    #[arg(long)]
    header: Option<String>,

    /// Footer text centred at the bottom of the page
    #[arg(long)]
    footer: Option<String>,
}

impl PageArgs {
    fn new_page(&self) -> Page {
        let margins = self.margins.then(|| Margins::all(Pt(40.0)));
        Page::new(self.orientation.page_size(), margins)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a centred coordinate grid with labeled axes
    Grid {
        #[command(flatten)]
        page: PageArgs,

        /// Output file path
        #[arg(short, long, default_value = "grid.pdf")]
        output: PathBuf,

        /// Axis unit per grid spacing, e.g. "1", "1/2", or "0.5"
        #[arg(short, long, default_value = "1")]
        unit: String,

        /// Tick label style
        #[arg(long, value_enum, default_value_t = Labels::FractionBest)]
        labels: Labels,

        /// Distance between grid lines, in points
        #[arg(long, default_value_t = 28.35)]
        spacing: f32,

        /// Grid line colour
        #[arg(long, default_value = "#555555")]
        grid_color: Colour,

        /// Axis line colour
        #[arg(long, default_value = "#ffffff")]
        axis_color: Colour,

        /// Tick label colour
        #[arg(long, default_value = "#ffffff")]
        label_color: Colour,

        /// Largest denominator considered for fraction-best labels
        #[arg(long, default_value_t = 8)]
        max_denominator: i64,

        /// Note the axis unit in the lower-left corner
        #[arg(long)]
        legend: bool,
    },

    /// Generate a row/column table
    Table {
        #[command(flatten)]
        page: PageArgs,

        /// Output file path
        #[arg(short, long, default_value = "table.pdf")]
        output: PathBuf,

        /// Number of columns
        #[arg(short, long, default_value_t = 4)]
        cols: u32,

        /// Number of rows
        #[arg(short, long, default_value_t = 10)]
        rows: u32,

        /// Table line colour
        #[arg(long, default_value = "#ffffff")]
        line_color: Colour,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grid {
            page,
            output,
            unit,
            labels,
            spacing,
            grid_color,
            axis_color,
            label_color,
            max_denominator,
            legend,
        } => {
            let mut doc = Document::default();
            let font = doc.add_font(Font::Helvetica);
            let mut info = Info::new();
            info.title("Coordinate grid").subject(format!("axis unit {unit}"));
            doc.set_info(info);

            let config = GridConfig {
                style: GridStyle {
                    background: page.background,
                    grid: grid_color,
                    axes: axis_color,
                    labels: label_color,
                },
                spacing: Pt(spacing),
                unit: parse_unit(&unit),
                labels: labels.into(),
                max_denominator,
                header: page.header.clone(),
                footer: page.footer.clone(),
                legend,
            };

            let mut page = page.new_page();
            config.render(&doc, font, &mut page)?;
            doc.add_page(page);
            write_out(doc, &output)?;
        }

        Commands::Table {
            page,
            output,
            cols,
            rows,
            line_color,
        } => {
            let mut doc = Document::default();
            let font = doc.add_font(Font::Helvetica);
            let mut info = Info::new();
            info.title("Table").subject(format!("{cols}x{rows}"));
            doc.set_info(info);

            let config = TableConfig {
                columns: cols,
                rows,
                background: page.background,
                lines: line_color,
                header: page.header.clone(),
                footer: page.footer.clone(),
            };

            let mut page = page.new_page();
            config.render(&doc, font, &mut page)?;
            doc.add_page(page);
            write_out(doc, &output)?;
        }
    }

    Ok(())
}

fn write_out(doc: Document, path: &Path) -> Result<()> {
    let out = File::create(path)?;
    doc.write(out)?;
    info!(path = %path.display(), "wrote PDF");
    println!("Wrote {}", path.display());
    Ok(())
}
