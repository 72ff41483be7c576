use clap::Parser;

use engine_test::cli::{Cli, Commands, add};

fn main() {
    #[cfg(feature = "tracing")]
    engine_test::helper::tracing::init_subscriber();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Add(args) => add::run(args, &cli.config_file),
    };
    if let Err(e) = result {
        eprintln!("Error adding integration: {e}");
        std::process::exit(1);
    }
}
