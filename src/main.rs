use clap::{Args, Parser, Subcommand};

use estima::cloud::{self, PricingBook, Provider, StorageClass, UsageInput};
use estima::output;
use estima::pau::{self, GradeInput};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_PRICING: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a PAU admission score (Arquitectura, UPM weighting)
    Pau(PauArgs),
    /// Estimate one provider's monthly storage bill
    Cloud(CloudArgs),
    /// Price the same usage on both providers and compare
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct PauArgs {
    /// Bachillerato average (5-10)
    #[arg(long, default_value_t = 9.75)]
    bachillerato: f64,

    /// Lengua Castellana y Literatura (0-10)
    #[arg(long, default_value_t = 8.0)]
    lengua: f64,

    /// Historia de la Filosofía (0-10)
    #[arg(long, default_value_t = 8.0)]
    historia: f64,

    /// Inglés (0-10)
    #[arg(long, default_value_t = 8.0)]
    ingles: f64,

    /// Matemáticas II (0-10)
    #[arg(long, default_value_t = 8.0)]
    matematicas: f64,

    /// Física (0-10)
    #[arg(long, default_value_t = 8.0)]
    fisica: f64,

    /// Dibujo Técnico II (0-10)
    #[arg(long, default_value_t = 8.0)]
    dibujo: f64,
}

#[derive(Args, Debug)]
struct UsageArgs {
    /// GB-months stored
    #[arg(long)]
    storage_gb: f64,

    /// GB transferred out to the internet per month
    #[arg(long, default_value_t = 0.0)]
    transfer_gb: f64,

    /// GET (read) requests per month
    #[arg(long, default_value_t = 0)]
    gets: u64,

    /// PUT (write) requests per month
    #[arg(long, default_value_t = 0)]
    puts: u64,
}

#[derive(Args, Debug)]
struct CloudArgs {
    /// Cloud provider to price
    #[arg(long, value_enum)]
    provider: Provider,

    /// Storage class, as the provider names it
    #[arg(long = "class", value_enum)]
    storage_class: StorageClass,

    #[command(flatten)]
    usage: UsageArgs,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Storage class to price on both providers
    #[arg(long = "class", value_enum)]
    storage_class: StorageClass,

    #[command(flatten)]
    usage: UsageArgs,
}

#[derive(Parser, Debug)]
#[command(name = "estima")]
#[command(about = "PAU admission score and cloud storage cost calculators", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn usage_input(provider: Provider, class: StorageClass, usage: &UsageArgs) -> UsageInput {
    UsageInput {
        provider,
        storage_class: class,
        storage_gb: usage.storage_gb,
        transfer_out_gb: usage.transfer_gb,
        get_requests: usage.gets,
        put_requests: usage.puts,
    }
}

fn compute_or_exit(usage: &UsageInput, pricing: &PricingBook) -> cloud::CostBreakdown {
    match cloud::compute_cost(usage, pricing) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            eprintln!("Pricing error: {e}");
            std::process::exit(EXIT_PRICING);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let pricing = PricingBook::default();
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Pau(args) => {
            let grades = GradeInput {
                bachillerato: args.bachillerato,
                lengua: args.lengua,
                historia: args.historia,
                ingles: args.ingles,
                matematicas: args.matematicas,
                fisica: args.fisica,
                dibujo: args.dibujo,
            };

            if cli.verbose {
                eprintln!("Grades: {grades:?}");
            }

            if let Err(errors) = pau::validate_grades(&grades) {
                eprintln!("Grade input errors:");
                for error in &errors {
                    eprintln!("  - {error}");
                }
                std::process::exit(EXIT_INPUT);
            }

            let result = pau::compute_score(&grades);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("score result serializes")
                );
            } else {
                println!("{}", output::format_score_result(&result, use_colors));
            }
        }
        Commands::Cloud(args) => {
            let usage = usage_input(args.provider, args.storage_class, &args.usage);
            if cli.verbose {
                eprintln!("Usage: {usage:?}");
            }

            let breakdown = compute_or_exit(&usage, &pricing);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&breakdown).expect("breakdown serializes")
                );
            } else {
                println!("{}", output::format_cost_breakdown(&breakdown, use_colors));
            }
        }
        Commands::Compare(args) => {
            let gcp_usage = usage_input(Provider::Gcp, args.storage_class, &args.usage);
            let aws_usage = usage_input(Provider::Aws, args.storage_class, &args.usage);
            if cli.verbose {
                eprintln!("Usage: {:?}", args.usage);
                eprintln!("Class: {}", args.storage_class);
            }

            let gcp = compute_or_exit(&gcp_usage, &pricing);
            let aws = compute_or_exit(&aws_usage, &pricing);
            let comparison = cloud::compare_costs(&gcp, &aws);

            if cli.json {
                let combined = serde_json::json!({
                    "gcp": gcp,
                    "aws": aws,
                    "comparison": comparison,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&combined).expect("comparison serializes")
                );
            } else {
                println!("{}", output::format_cost_breakdown(&gcp, use_colors));
                println!();
                println!("{}", output::format_cost_breakdown(&aws, use_colors));
                println!();
                println!(
                    "{}",
                    output::format_comparison(&gcp, &aws, &comparison, use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
