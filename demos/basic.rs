//! Basic example demonstrating the PokeAPI client.
//!
//! Run with:
//! ```
//! cargo run --example basic
//! ```

use pokedex::{Get, PokeApiClient, Pokemon};

#[tokio::main]
async fn main() -> pokedex::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating PokeAPI client...");
    let client = PokeApiClient::new()?;
    println!("Connected to: {}", client.base_url());

    // Fetch by name
    println!("\n--- Fetching pikachu by name ---");
    let pikachu = client.get_pokemon("pikachu").await?;
    println!("#{} {}", pikachu.id, pikachu.name);
    println!("  Types: {}", pikachu.types.join(", "));

    // Fetch by numeric id through the Get trait
    println!("\n--- Fetching #6 by id ---");
    let charizard = Pokemon::get(&client, 6.into()).await?;
    println!("#{} {}", charizard.id, charizard.name);
    println!("  Types: {}", charizard.types.join(", "));

    // A lookup that fails maps to a typed error
    println!("\n--- Fetching a pokemon that does not exist ---");
    match client.get_pokemon("missingno").await {
        Ok(p) => println!("Unexpectedly found: {}", p.name),
        Err(e) => println!("As expected: {e}"),
    }

    Ok(())
}
