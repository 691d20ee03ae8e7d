//! PokeAPI CLI binary.
//!
//! A command-line interface for looking up pokemon.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use pokedex::cli::{Cli, Command};
use pokedex::{Identifier, PokeApiClient, Pokemon, PrettyPrint};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let timeout = Duration::from_secs_f64(cli.timeout);
    let client = match PokeApiClient::with_timeout(timeout) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &PokeApiClient, cli: Cli) -> pokedex::Result<()> {
    match cli.command {
        Command::Get { identifier } => handle_get(client, &identifier, cli.json).await,
    }
}

async fn handle_get(client: &PokeApiClient, identifier: &str, json: bool) -> pokedex::Result<()> {
    // A numeric argument addresses the pokemon by id, anything else by name
    let identifier = match identifier.parse::<u32>() {
        Ok(id) => Identifier::Id(id),
        Err(_) => Identifier::from(identifier),
    };

    let pokemon = client.get_pokemon(identifier).await?;
    output_single(&pokemon, json)
}

fn output_single(pokemon: &Pokemon, json: bool) -> pokedex::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(pokemon)?);
    } else {
        println!("{}", pokemon.pretty_print());
    }
    Ok(())
}
