//! Stack Advisor CLI
//!
//! - `recommend`: JSON questionnaire from a file or stdin
//! - `interactive`: questionnaire in the terminal
//! - `serve`: HTTP front end
//! - `knowledge-base`: dump the active tables

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

use stack_advisor::cli::prompt_input;
use stack_advisor::render::{render, RenderFormat};
use stack_advisor::utils::init_tracing;
use stack_advisor::{recommend, AdvisorConfig, ProjectInput};

#[derive(Debug, Parser)]
#[command(name = "stack-advisor", version, about = "Deterministic tech-stack recommendations")]
struct Cli {
    /// Replacement knowledge base (YAML or JSON)
    #[arg(long, global = true)]
    knowledge_base: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a recommendation from a JSON questionnaire
    Recommend {
        /// Questionnaire file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
        /// json, markdown or html
        #[arg(short, long, default_value = "markdown")]
        format: RenderFormat,
    },
    /// Answer the questionnaire interactively
    Interactive {
        #[arg(short, long, default_value = "markdown")]
        format: RenderFormat,
    },
    /// Run the HTTP service
    Serve {
        #[arg(long)]
        addr: Option<String>,
    },
    /// Print the active knowledge base
    KnowledgeBase {
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Yaml)]
        format: DumpFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DumpFormat {
    Yaml,
    Json,
}

fn read_questionnaire(source: &str) -> Result<ProjectInput> {
    let content = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?
    };
    serde_json::from_str(&content).context("questionnaire is not valid JSON")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AdvisorConfig::from_env().with_knowledge_base_path(cli.knowledge_base);
    init_tracing(&config.log_filter)?;

    match cli.command {
        Command::Recommend { input, format } => {
            let kb = config.load_knowledge_base()?;
            let questionnaire = read_questionnaire(&input)?;
            let record = recommend(&questionnaire, &kb)?;
            println!("{}", render(&record, format)?);
        }
        Command::Interactive { format } => {
            let kb = config.load_knowledge_base()?;
            let stdin = io::stdin();
            let questionnaire = prompt_input(&mut stdin.lock(), &mut io::stdout())?;
            let record = recommend(&questionnaire, &kb)?;
            println!("\n{}", render(&record, format)?);
        }
        Command::Serve { addr } => {
            let config = config.with_bind_addr(addr);
            info!("Starting HTTP service on {}", config.bind_addr);
            stack_advisor::server::run_server(config).await?;
        }
        Command::KnowledgeBase { format } => {
            let kb = config.load_knowledge_base()?;
            let dump = match format {
                DumpFormat::Yaml => kb.to_yaml()?,
                DumpFormat::Json => kb.to_json()?,
            };
            println!("{dump}");
        }
    }

    Ok(())
}
