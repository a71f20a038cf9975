use std::process::ExitCode;

use agrisim::{
    Assistant, DecisionRequester, InputGenerator, LlmConfig, RunOutcome, UseCase,
    agent::simulation::{COMMAND_DISPATCH_NOTICE, COMPLETION_NOTICE, FEEDBACK_NOTICE},
    error::{Error, Result},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "agrisim",
    version,
    about = "LLM-IoT agricultural assistant with synthetic sensor data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available use cases
    List,
    /// Generate synthetic inputs for a use case and ask the model for a decision
    Run {
        /// Use case display name or its number from `list`
        use_case: String,
        /// Seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,
        /// Print the prompt instead of calling the model
        #[arg(long)]
        dry_run: bool,
        /// Emit a single JSON report on stdout
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match LlmConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);

    match execute(cli.command, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_use_case(raw: &str) -> Result<UseCase> {
    match raw.trim().parse::<usize>() {
        Ok(index) => {
            UseCase::from_index(index).ok_or_else(|| Error::UnknownUseCase(raw.to_string()))
        }
        Err(_) => raw.parse(),
    }
}

async fn execute(command: Command, config: LlmConfig) -> Result<bool> {
    match command {
        Command::List => {
            println!("🌾 Use cases:");
            for (i, uc) in UseCase::ALL.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, uc);
            }
            Ok(true)
        }
        Command::Run {
            use_case,
            seed,
            dry_run,
            json,
        } => {
            let use_case = resolve_use_case(&use_case)?;
            let generator = match seed {
                Some(seed) => InputGenerator::seeded(seed),
                None => InputGenerator::from_entropy(),
            };
            let requester = DecisionRequester::from_config(&config)?;
            let mut assistant = Assistant::new(generator, requester);

            if dry_run {
                let inputs = assistant.generate(use_case);
                let prompt = assistant.preview_prompt(use_case, &inputs)?;
                println!("🔍 Synthetic Input Data\n{}", serde_json::to_string_pretty(&inputs)?);
                println!("\n📜 Prompt ({})\n{}", assistant.requester().model(), prompt);
                return Ok(true);
            }

            let outcome = assistant.run(use_case).await;
            let success = outcome.is_success();
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.into_report())?);
            } else {
                print_outcome(outcome)?;
            }
            Ok(success)
        }
    }
}

fn print_outcome(outcome: RunOutcome) -> Result<()> {
    println!("🔍 Synthetic Input Data ({})", outcome.use_case);
    println!("{}", serde_json::to_string_pretty(&outcome.inputs)?);

    let decision = outcome.decision?;
    println!("\n🤖 LLM Decision Output\n{}", decision);
    println!("\n📡 IoT Command (Simulated Execution)\n{}", COMMAND_DISPATCH_NOTICE);
    println!("\n🔁 Feedback Loop\n{}", FEEDBACK_NOTICE);
    println!("\n✅ {}", COMPLETION_NOTICE);
    Ok(())
}
