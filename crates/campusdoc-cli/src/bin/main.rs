use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    campusdoc_cli::run_cli()
}
