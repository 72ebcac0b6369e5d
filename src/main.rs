use clap::{Parser, Subcommand};
use gridfill::{GridConfig, GridError, Traversal};

#[derive(Parser)]
#[command(name = "gridfill")]
#[command(about = "Fill a 100x200 grid row-major and print it, one value per line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the filled grid (the default)
    Print {
        /// How the fill and print passes walk the grid
        #[arg(long, value_enum, default_value_t = Traversal::Subscript)]
        traversal: Traversal,
    },
    /// Check that every traversal idiom prints byte-identical output
    Verify,
}

fn main() -> Result<(), GridError> {
    gridfill::init_tracing("gridfill");
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Print {
        traversal: Traversal::default(),
    }) {
        Commands::Print { traversal } => {
            gridfill::run_reference(traversal)?;
        }
        Commands::Verify => {
            let lines = gridfill::verify_equivalence(&GridConfig::reference())?.into_result()?;
            println!(
                "[gridfill][verify] subscript and cursor outputs identical ({} lines)",
                lines
            );
        }
    }

    Ok(())
}
