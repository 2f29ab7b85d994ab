//! Render the default homepage to stdout

use layouts::{homepage, HomepageConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let page = homepage(&HomepageConfig::default());
    page.validate()?;

    println!("{}", page);

    Ok(())
}
