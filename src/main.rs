use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use dest_rank::catalog::{BudgetTier, Catalog};
use dest_rank::scoring::{Category, FilterThresholds, WeightVector};
use tracing::{debug, warn};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the whole catalog (default if no subcommand)
    Rank {
        /// Only consider destinations in this budget tier (budget, mid-range, luxury)
        #[arg(long)]
        tier: Option<BudgetTier>,

        /// Show at most this many destinations
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Compare 2 to 4 destinations side by side
    Compare {
        /// Destination ids, e.g. `paris tokyo`
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Parser, Debug)]
#[command(name = "dest-rank")]
#[command(about = "Travel destination scoring and comparison CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/dest-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Destination catalog (.yaml, .yml or .json); defaults to the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override a category weight, e.g. `--weight cost=30` (repeatable)
    #[arg(
        long = "weight",
        value_name = "CATEGORY=N",
        value_parser = parse_category_value,
        global = true
    )]
    weights: Vec<(Category, f64)>,

    /// Require a minimum category score, e.g. `--min safety=60` (repeatable)
    #[arg(
        long = "min",
        value_name = "CATEGORY=N",
        value_parser = parse_category_value,
        global = true
    )]
    minimums: Vec<(Category, f64)>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_category_value(s: &str) -> Result<(Category, f64), String> {
    dest_rank::scoring::parse_assignment(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    dest_rank::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Rank {
        tier: None,
        limit: None,
        format: OutputFormat::Table,
    });
    let start_time = Instant::now();

    // Load config
    let config = match dest_rank::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Command-line overrides win over the config file
    let weights = cli
        .weights
        .iter()
        .fold(config.effective_weights(), |w, (category, value)| {
            w.with(*category, *value)
        });
    let thresholds = cli
        .minimums
        .iter()
        .fold(config.effective_filters(), |t, (category, value)| {
            t.with(*category, *value)
        });

    if let Err(errors) = dest_rank::scoring::validate_preferences(&weights, &thresholds) {
        eprintln!("Preference errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let total = weights.total();
    if (total - 100.0).abs() > f64::EPSILON {
        warn!(
            weight_total = total,
            "Weights do not sum to 100; weighted scores scale by {:.2}",
            total / 100.0
        );
    }

    // Load catalog
    let catalog_path = cli.catalog.or(config.catalog);
    let catalog = match &catalog_path {
        Some(path) => dest_rank::catalog::load_catalog(path),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = dest_rank::catalog::validate_catalog(&catalog) {
        eprintln!("Catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    debug!(
        destinations = catalog.len(),
        source = %catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "Catalog ready"
    );

    let use_colors = dest_rank::output::should_use_colors();

    let code = match command {
        Commands::Rank { tier, limit, format } => {
            run_rank(&catalog, tier, limit, format, &weights, &thresholds, cli.verbose, use_colors)
        }
        Commands::Compare { ids, format } => {
            run_compare(&catalog, &ids, format, &weights, cli.verbose, use_colors)
        }
    };

    debug!(elapsed = ?start_time.elapsed(), "Done");
    std::process::exit(code);
}

#[allow(clippy::too_many_arguments)]
fn run_rank(
    catalog: &Catalog,
    tier: Option<BudgetTier>,
    limit: Option<usize>,
    format: OutputFormat,
    weights: &WeightVector,
    thresholds: &FilterThresholds,
    verbose: bool,
    use_colors: bool,
) -> i32 {
    // A tier narrows the candidate set, so it must happen before scoring
    let candidates = match tier {
        Some(t) => catalog.filter_tier(t),
        None => catalog.clone(),
    };

    let scored = dest_rank::scoring::score(&candidates.destinations, weights);
    let filtered = if thresholds.is_unconstrained() {
        scored
    } else {
        let scored_count = scored.len();
        let kept = dest_rank::scoring::filter(scored, thresholds);
        debug!(scored = scored_count, kept = kept.len(), "Applied thresholds");
        kept
    };

    let mut ranked = dest_rank::scoring::rank(filtered);
    if let Some(n) = limit {
        ranked.truncate(n);
    }

    match format {
        OutputFormat::Table => {
            if verbose && !ranked.is_empty() {
                for entry in &ranked {
                    println!(
                        "{}",
                        dest_rank::output::format_ranked_detail(entry, weights, use_colors)
                    );
                    println!();
                }
            } else {
                println!(
                    "{}",
                    dest_rank::output::format_ranked_table(&ranked, use_colors)
                );
            }
        }
        OutputFormat::Tsv => {
            let output = dest_rank::output::format_tsv(&ranked);
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        OutputFormat::Json => match dest_rank::output::format_json(&ranked) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{:#}", e);
                return EXIT_CONFIG;
            }
        },
    }

    EXIT_SUCCESS
}

fn run_compare(
    catalog: &Catalog,
    ids: &[String],
    format: OutputFormat,
    weights: &WeightVector,
    verbose: bool,
    use_colors: bool,
) -> i32 {
    let selection = match dest_rank::compare::select(catalog, ids) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{:#}", e);
            return EXIT_INPUT;
        }
    };

    let comparison = dest_rank::compare::compare(&selection, weights);

    match format {
        OutputFormat::Table => {
            println!(
                "{}",
                dest_rank::output::format_comparison(&comparison, use_colors)
            );
            if verbose {
                println!();
                for entry in &comparison.ranking {
                    println!(
                        "{}",
                        dest_rank::output::format_ranked_detail(entry, weights, use_colors)
                    );
                    println!();
                }
            }
        }
        OutputFormat::Tsv => {
            println!("{}", dest_rank::output::format_tsv(&comparison.ranking));
        }
        OutputFormat::Json => match dest_rank::output::format_json(&comparison) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{:#}", e);
                return EXIT_CONFIG;
            }
        },
    }

    EXIT_SUCCESS
}
