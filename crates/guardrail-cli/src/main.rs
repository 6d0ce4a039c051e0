//! Agent Guardrails CLI - command-line demo for the guardrail stack

use anyhow::bail;
use clap::Parser;

use guardrail_core::{EngineConfig, GuardrailEngine, Verdict};
use guardrail_filter::{Classifier, GuardrailKind};
use guardrail_scenarios::{
    run_all, BreachEstimate, CoverageMatrix, Defense, Industry, VulnerableResponder,
};

#[derive(Parser)]
#[command(name = "guardrail")]
#[command(about = "Agent Guardrails - Prompt injection attacks and defenses, hands on")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Classify text with a single pattern layer
    Scan {
        /// Pattern layer: input, output, scope, or escalation
        #[arg(short, long, default_value = "input")]
        layer: String,

        /// The text to classify
        text: String,
    },
    /// Screen an attack end to end against the vulnerable demo agent
    Screen {
        /// The attack prompt
        text: String,
    },
    /// Run the pre-baked attack scenarios through the pattern layers
    Scenarios {
        /// Only run scenarios whose name contains this substring
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Print the scenario x defense coverage matrix
    Matrix,
    /// Estimate breach costs against the guardrail investment
    Impact {
        /// Industry profile: healthcare, financial, retail, or technology
        #[arg(short, long, default_value = "retail")]
        industry: String,

        /// Records at risk (defaults to the industry average)
        #[arg(short, long)]
        records: Option<u64>,

        /// Annual breach probability as a fraction
        #[arg(short, long, default_value_t = 0.15)]
        probability: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Some(Commands::Scan { layer, text }) => scan(&layer, &text),
        Some(Commands::Screen { text }) => {
            screen(&text);
            Ok(())
        }
        Some(Commands::Scenarios { name }) => {
            scenarios(name.as_deref());
            Ok(())
        }
        Some(Commands::Matrix) => {
            matrix();
            Ok(())
        }
        Some(Commands::Impact {
            industry,
            records,
            probability,
        }) => impact(&industry, records, probability),
        None => {
            println!("Agent Guardrails v0.1.0 - Use --help for commands");
            Ok(())
        }
    }
}

fn scan(layer: &str, text: &str) -> anyhow::Result<()> {
    let kind = match layer {
        "input" => GuardrailKind::InputValidation,
        "output" => GuardrailKind::OutputFilter,
        "scope" => GuardrailKind::ScopeEnforcement,
        "escalation" => GuardrailKind::Escalation,
        other => bail!("unknown layer '{other}' (expected input, output, scope, or escalation)"),
    };

    let classifier = Classifier::new();
    let result = classifier.classify(kind, text);

    if result.triggered {
        println!(
            "{}: {} pattern(s) matched (risk {:.2})",
            kind,
            result.match_count(),
            result.risk_score
        );
        for detection in &result.detections {
            println!("  - {}", detection.label);
        }
    } else {
        println!("{kind}: no patterns matched");
    }

    Ok(())
}

fn screen(text: &str) {
    let engine = GuardrailEngine::new(EngineConfig::default());

    match engine.screen_input(text) {
        Verdict::Block { reasons } => {
            println!("BLOCKED before reaching the agent:");
            for reason in reasons {
                println!("  - {reason}");
            }
            return;
        }
        Verdict::Review { flags } => {
            println!("QUEUED for human approval:");
            for flag in flags {
                println!("  - {flag}");
            }
            return;
        }
        Verdict::Allow => {
            println!("Pre-screen passed; forwarding to the vulnerable demo agent...\n");
        }
    }

    let responder = VulnerableResponder::new();
    match responder.respond(text) {
        None => {
            println!("The agent answered normally; no attack shape recognized.");
        }
        Some(breach) => {
            println!("Agent response (breach: {}):\n", breach.breach_type);
            println!("{}\n", breach.response);

            match engine.screen_output(text, &breach.response) {
                Verdict::Block { reasons } => {
                    println!("INTERCEPTED at the output boundary:");
                    for reason in reasons {
                        println!("  - {reason}");
                    }
                }
                Verdict::Review { flags } => {
                    println!("Output flagged for review:");
                    for flag in flags {
                        println!("  - {flag}");
                    }
                }
                Verdict::Allow => {
                    println!("WARNING: the breach passed the output filter.");
                }
            }
        }
    }
}

fn scenarios(filter: Option<&str>) {
    let classifier = Classifier::new();

    for report in run_all(&classifier) {
        if let Some(needle) = filter {
            if !report
                .scenario
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                continue;
            }
        }

        println!("{}", report.scenario);
        print_layer("input filter", &report.input_filter);
        print_layer("scope check", &report.scope_check);
        print_layer("escalation", &report.escalation);
        print_layer("output filter", &report.output_filter);
        if report.evades_prescreen() {
            println!("  !! evades every pre-LLM pattern layer");
        }
        println!();
    }
}

fn print_layer(name: &str, result: &guardrail_filter::Classification) {
    if result.triggered {
        println!("  {name}: {}", result.labels().join(", "));
    } else {
        println!("  {name}: -");
    }
}

fn matrix() {
    let matrix = CoverageMatrix::build();

    println!("{:<34} {}", "Attack", "Covered by");
    for row in &matrix.rows {
        let covered: Vec<&str> = row.covered_by.iter().map(|d| d.short_name()).collect();
        println!("{:<34} {}", row.scenario, covered.join(", "));
    }

    println!();
    for defense in Defense::ALL {
        println!(
            "{}: {}/{} scenarios",
            defense.short_name(),
            matrix.coverage_count(defense),
            matrix.rows.len()
        );
    }
    println!("\nNo single layer covers every attack.");
}

fn impact(industry: &str, records: Option<u64>, probability: f64) -> anyhow::Result<()> {
    let industry: Industry = industry.parse().map_err(anyhow::Error::msg)?;
    let profile = industry.profile();
    let records = records.unwrap_or(profile.avg_records);
    let estimate = BreachEstimate::compute(&profile, records, probability);

    println!("{} ({} records at risk)", profile.industry, records);
    println!("  Breach cost:          ${:>12.0}", estimate.breach_cost);
    println!(
        "  Expected annual loss: ${:>12.0}",
        estimate.expected_annual_loss
    );
    println!("  Guardrail investment: ${:>12.0}", estimate.guardrail_cost);
    println!("  ROI:                  {:>12.0}%", estimate.roi_percent);
    println!("  Regulatory exposure:  {}", profile.regulatory_fine_range);
    println!("  Reputation impact:    {}", profile.reputation_impact);

    if estimate.pays_off() {
        println!("\nGuardrails pay for themselves before counting fines or reputation.");
    } else {
        println!("\nROI is marginal at these parameters; fines and reputation typically multiply true cost 3-5x.");
    }

    Ok(())
}
