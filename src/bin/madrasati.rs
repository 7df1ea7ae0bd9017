use anyhow::Result;
use madrasati::cli::{actions::run, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    run::handle(action, &globals).await?;

    Ok(())
}
