mod launch;

fn main() -> anyhow::Result<()> {
    let mut portfolio = launch::init()?;
    portfolio.run();
    Ok(())
}
