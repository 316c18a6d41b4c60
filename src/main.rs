//! Pitch Polisher CLI
//!
//! Command-line front end for projections, market sizing and generated pitch reports

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use pitch_polisher::generation::SettingsOverrides;
use pitch_polisher::report::{render, render_markdown, write_projection_csv_file};
use pitch_polisher::{
    GeminiClient, GenerationSettings, MarketInputs, PitchContext, PitchRequest, PitchSection,
    ProjectionAssumptions, ProjectionEngine, ProjectionTable, ReportBuilder, ScenarioRunner,
};

#[derive(Parser)]
#[command(name = "pitch_polisher", version, about = "Turn raw startup ideas into investor-ready outputs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a month-by-month revenue projection
    Project {
        #[command(flatten)]
        projection: ProjectionArgs,
        /// Also write the table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print a TAM / SAM / SOM estimate
    Market {
        #[command(flatten)]
        market: MarketArgs,
        #[arg(long)]
        json: bool,
    },
    /// Re-run the projection for several monthly growth rates
    Sweep {
        #[command(flatten)]
        projection: ProjectionArgs,
        /// Growth rate to try (repeatable)
        #[arg(long = "rate", required = true, allow_negative_numbers = true)]
        rates: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Print the prompts that would be sent, without calling the model
    Prompts {
        #[command(flatten)]
        context: ContextArgs,
        /// Section to include (repeatable); defaults to the standard selection
        #[arg(long = "section")]
        sections: Vec<PitchSection>,
    },
    /// Generate the full pitch report
    Generate {
        #[command(flatten)]
        context: ContextArgs,
        /// Section to include (repeatable); defaults to the standard selection
        #[arg(long = "section")]
        sections: Vec<PitchSection>,
        #[command(flatten)]
        projection: ProjectionArgs,
        #[command(flatten)]
        market: MarketArgs,
        #[command(flatten)]
        generation: GenerationArgs,
        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also write the projection table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Emit the report as JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ProjectionArgs {
    /// Number of months to project
    #[arg(long, default_value_t = 12)]
    months: u32,
    /// Users in month 1
    #[arg(long, default_value_t = 100.0)]
    base_users: f64,
    /// Monthly growth rate (0.15 = 15%)
    #[arg(long, default_value_t = 0.15, allow_negative_numbers = true)]
    growth: f64,
    /// Average revenue per user per month
    #[arg(long, default_value_t = 5.0)]
    arpu: f64,
    /// COGS as a share of revenue
    #[arg(long, default_value_t = 0.25)]
    cogs_pct: f64,
    /// Fixed monthly operating cost
    #[arg(long, default_value_t = 2000.0)]
    opex: f64,
}

impl ProjectionArgs {
    fn assumptions(&self) -> ProjectionAssumptions {
        ProjectionAssumptions {
            months: self.months,
            base_users: self.base_users,
            monthly_growth: self.growth,
            arpu: self.arpu,
            cogs_pct: self.cogs_pct,
            opex: self.opex,
        }
    }
}

#[derive(Args)]
struct MarketArgs {
    /// Top-down total market size
    #[arg(long, default_value_t = 1_000_000_000.0)]
    total: f64,
    /// Share of the total you can serve
    #[arg(long, default_value_t = 0.35)]
    serviceable: f64,
    /// Share of the serviceable market you can win
    #[arg(long, default_value_t = 0.07)]
    obtainable: f64,
}

impl MarketArgs {
    fn inputs(&self) -> MarketInputs {
        MarketInputs {
            top_down_total: self.total,
            serviceable_ratio: self.serviceable,
            obtainable_ratio: self.obtainable,
        }
    }
}

#[derive(Args)]
struct ContextArgs {
    /// Raw idea or draft pitch
    #[arg(long)]
    idea: String,
    #[arg(long, default_value = "")]
    industry: String,
    /// Target geography
    #[arg(long, default_value = "")]
    geo: String,
    /// Primary customers or users
    #[arg(long, default_value = "")]
    audience: String,
    /// Early traction (metrics, users, pilots, revenue)
    #[arg(long, default_value = "")]
    traction: String,
    /// Team (founders, roles, skills)
    #[arg(long, default_value = "")]
    team: String,
    /// Competitors, comma separated
    #[arg(long, default_value = "")]
    competitors: String,
    /// Pricing or business model
    #[arg(long, default_value = "")]
    pricing: String,
    /// Go-to-market channels
    #[arg(long, default_value = "")]
    channels: String,
}

impl ContextArgs {
    fn context(&self) -> PitchContext {
        PitchContext {
            idea: self.idea.clone(),
            industry: self.industry.clone(),
            geo: self.geo.clone(),
            audience: self.audience.clone(),
            traction: self.traction.clone(),
            team: self.team.clone(),
            pricing: self.pricing.clone(),
            channels: self.channels.clone(),
        }
        .trimmed()
    }
}

#[derive(Args)]
struct GenerationArgs {
    /// Gemini API key (defaults to GOOGLE_API_KEY / GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
    /// Model name
    #[arg(long)]
    model: Option<String>,
    /// Creativity, 0.0 to 1.0
    #[arg(long)]
    temperature: Option<f32>,
    /// Maximum output tokens per section (256 to 2048)
    #[arg(long)]
    max_output_tokens: Option<u32>,
}

impl GenerationArgs {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

fn section_selection(sections: &[PitchSection]) -> Option<Vec<PitchSection>> {
    if sections.is_empty() {
        None
    } else {
        Some(sections.to_vec())
    }
}

fn print_projection(table: &ProjectionTable) {
    println!(
        "{:>5} {:>8} {:>12} {:>12} {:>14} {:>12} {:>12}",
        "Month", "Users", "Revenue", "COGS", "Gross Profit", "OPEX", "Net Profit"
    );
    println!("{}", "-".repeat(81));
    for row in &table.rows {
        println!(
            "{:>5} {:>8} {:>12.2} {:>12.2} {:>14.2} {:>12.2} {:>12.2}",
            row.month, row.users, row.revenue, row.cogs, row.gross_profit, row.opex, row.net_profit
        );
    }

    let summary = table.summary();
    println!("\nSummary:");
    println!("  Months: {}", summary.total_months);
    println!("  Total Revenue: ${:.2}", summary.total_revenue);
    println!("  Total Net Profit: ${:.2}", summary.total_net_profit);
    println!("  Final Users: {}", summary.final_users);
    match summary.break_even_month {
        Some(month) => println!("  Break-even Month: {}", month),
        None => println!("  Break-even Month: not reached"),
    }
}

async fn generate_report(
    request: PitchRequest,
    generation: &GenerationArgs,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut settings = GenerationSettings::from_env();
    settings.apply(&generation.overrides());
    settings.validate()?;
    request.validate()?;

    let client = GeminiClient::new(&settings)?;
    let report = ReportBuilder::new(client).build(&request).await?;

    let rendered = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        render_markdown(&report)
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("writing report to {}", path.display()))?;
            println!("Report written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    if let Some(path) = csv {
        match report.projection() {
            Some(table) => write_projection_csv_file(&path, table)?,
            None => log::warn!("--csv given but the financials section was not selected"),
        }
    }

    if report.failure_count() > 0 {
        eprintln!("{} section(s) failed to generate", report.failure_count());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project { projection, csv, json } => {
            let assumptions = projection.assumptions();
            assumptions.validate()?;
            let table = ProjectionEngine::new(assumptions).run();

            if json {
                println!("{}", serde_json::to_string_pretty(&table.rows)?);
            } else {
                print_projection(&table);
            }
            if let Some(path) = csv {
                write_projection_csv_file(&path, &table)?;
                println!("\nFull results written to: {}", path.display());
            }
        }
        Command::Market { market, json } => {
            let inputs = market.inputs();
            inputs.validate()?;
            let estimate = inputs.estimate();

            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("{}", render::market_line(&estimate));
            }
        }
        Command::Sweep { projection, rates, json } => {
            let base = projection.assumptions();
            base.validate()?;
            for &rate in &rates {
                ProjectionAssumptions { monthly_growth: rate, ..base.clone() }.validate()?;
            }

            let results = ScenarioRunner::new(base).run_growth_sweep(&rates);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{:>8} {:>12} {:>16} {:>18} {:>11}", "Growth", "Final Users", "Total Revenue", "Total Net Profit", "Break-even");
                println!("{}", "-".repeat(69));
                for result in &results {
                    let summary = result.summary();
                    let break_even = summary
                        .break_even_month
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:>7.1}% {:>12} {:>16.2} {:>18.2} {:>11}",
                        result.monthly_growth * 100.0,
                        summary.final_users,
                        summary.total_revenue,
                        summary.total_net_profit,
                        break_even
                    );
                }
            }
        }
        Command::Prompts { context, sections } => {
            let request = PitchRequest {
                competitors: context.competitors.clone(),
                sections: section_selection(&sections),
                ..PitchRequest::new(context.context())
            };
            request.validate()?;

            let competitors = pitch_polisher::prompts::competitors_or_placeholders(&request.competitors);
            for section in request.selected_sections() {
                if let Some(prompt) = section.prompt(&request.context, &competitors) {
                    println!("### {}\n\n{}", section.title(), prompt);
                }
            }
        }
        Command::Generate { context, sections, projection, market, generation, output, csv, json } => {
            let request = PitchRequest {
                competitors: context.competitors.clone(),
                sections: section_selection(&sections),
                projection: projection.assumptions(),
                market: market.inputs(),
                context: context.context(),
            };
            generate_report(request, &generation, output, csv, json).await?;
        }
    }

    Ok(())
}
