use crate::cli::ColourArgs;
use crate::config::PartialColourConfig;
use crate::error::Result;
use alascan::workflows;
use tracing::info;

pub fn run(args: ColourArgs) -> Result<()> {
    let partial_config = PartialColourConfig::load(args.config.as_deref())?;
    info!("Merging colour configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let script = workflows::colour::run(&args.pdb, &args.stats, &config, &args.output_dir)?;

    println!("✓ Colouring script written to: {}", script.display());
    Ok(())
}
