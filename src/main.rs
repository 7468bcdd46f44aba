mod cli;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use cli::{load_history, Commands};
use learnerbot::{
    ApiResponse, ChatCompletionClient, ChatMessage, ClientConfig, ListModelsUseCase,
    MockChatClient, OpenRouterClient, SendMessageUseCase,
};

#[derive(Parser)]
#[command(name = "learnerbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer locally without calling the provider
    #[arg(long, global = true)]
    mock: bool,

    /// Override the model from OPENROUTER_MODEL
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Ok(path) = dotenv::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let client: Arc<dyn ChatCompletionClient> = if cli.mock {
        info!("Using mock chat client");
        Arc::new(MockChatClient::echo())
    } else {
        let mut config = ClientConfig::from_env();
        if let Some(model) = cli.model.as_deref() {
            config = config.with_model(model);
        }
        info!("Using OpenRouter at {} ({})", config.base_url(), config.model());
        Arc::new(OpenRouterClient::new(config))
    };

    match cli.command {
        Commands::Chat { message, history } => {
            let history = match history {
                Some(path) => load_history(&path)?,
                None => vec![],
            };
            let use_case = SendMessageUseCase::new(client);

            match message {
                Some(message) => {
                    let response = use_case.execute(&message, &history).await;
                    print_response(&response);
                    if let Some(error) = response.error() {
                        anyhow::bail!("{error}");
                    }
                }
                None => interactive(&use_case, history).await?,
            }
        }

        Commands::Models { strict } => {
            let use_case = ListModelsUseCase::new(client);
            let models = if strict {
                use_case.try_execute().await?
            } else {
                use_case.execute().await
            };

            if models.is_empty() {
                println!("No models available.");
            } else {
                for model in models {
                    match (model.id(), model.name()) {
                        (Some(id), Some(name)) => println!("{id}  ({name})"),
                        (Some(id), None) => println!("{id}"),
                        _ => println!("{}", model.raw()),
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read questions from stdin until EOF or `exit`, carrying the conversation
/// forward between turns.
async fn interactive(use_case: &SendMessageUseCase, mut history: Vec<ChatMessage>) -> Result<()> {
    println!("LearnerBot is ready! Type a question, or `exit` to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let response = use_case.execute(line, &history).await;
        print_response(&response);

        if response.is_missing_configuration() {
            break;
        }
        if response.is_success() {
            history.push(ChatMessage::user(line));
            history.push(ChatMessage::assistant(response.message()));
        }
    }

    Ok(())
}

fn print_response(response: &ApiResponse) {
    if !response.message().is_empty() {
        println!("{}\n", response.message());
    }
    if let Some(error) = response.error() {
        eprintln!("error: {error}");
    }
}
