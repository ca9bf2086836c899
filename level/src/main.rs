use anyhow::Result;

fn main() -> Result<()> {
    level::run_level()
}
