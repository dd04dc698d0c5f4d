use anyhow::Result;

/// Main entry point
fn main() -> Result<()> {
    gsearch::cli::run()
}
