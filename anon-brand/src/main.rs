use anon_brand_rs::{
    AssetGenerator, FontFallback, FontSpec, GeneratorConfig, MarketingGenerator,
    DEFAULT_FONT_FILE,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const RULE_WIDTH: usize = 50;

/// anon-brand: procedural brand and marketing image generator for Anonymize.dev
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Parent directory of the assets/ and marketing/ output directories
    #[arg(long, global = true, default_value = ".")]
    output_root: PathBuf,

    /// TrueType font used for marketing text
    #[arg(long, global = true, default_value = DEFAULT_FONT_FILE)]
    font_file: PathBuf,

    /// Additional directory to search for the font file (repeatable)
    #[arg(long = "font-dir", global = true)]
    font_dirs: Vec<PathBuf>,

    /// Fail instead of substituting a default font when the font file is missing
    #[arg(long, global = true)]
    strict_fonts: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Generate logo, favicons, product, entity and feature icons, hero and pattern
    Assets,
    /// Generate social media posts, banners and product cards
    Marketing,
    /// Generate both sets (default)
    All,
}

impl GlobalOptions {
    fn config(&self, dir_name: &str) -> GeneratorConfig {
        let font = self
            .font_dirs
            .iter()
            .fold(FontSpec::new(&self.font_file), |spec, dir| {
                spec.with_search_dir(dir)
            });
        let fallback = if self.strict_fonts {
            FontFallback::Fail
        } else {
            FontFallback::Default
        };
        GeneratorConfig::new(self.output_root.join(dir_name))
            .with_font(font)
            .with_fallback(fallback)
    }
}

fn report(title: &str, done: &str, written: &[PathBuf]) {
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
    for path in written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        println!("Created: {name}");
    }
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{done}");
}

fn run_assets(options: &GlobalOptions) -> Result<()> {
    let config = options.config("assets");
    let written = AssetGenerator::new(config).run()?;
    report(
        "Generating Anonymize.dev brand assets...",
        "Brand assets generated successfully!",
        &written,
    );
    Ok(())
}

fn run_marketing(options: &GlobalOptions) -> Result<()> {
    let config = options.config("marketing");
    let written = MarketingGenerator::new(config).run()?;
    report(
        "Generating Anonymize.dev marketing materials...",
        "Marketing materials generated successfully!",
        &written,
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::All);
    log::debug!(
        "Running {:?} into {}",
        command,
        cli.options.output_root.display()
    );

    match command {
        Commands::Assets => run_assets(&cli.options),
        Commands::Marketing => run_marketing(&cli.options),
        Commands::All => {
            run_assets(&cli.options)?;
            run_marketing(&cli.options)
        }
    }
}
