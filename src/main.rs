use clap::{Parser, Subcommand};
use sprig::{AppError, InitOptions, PackageManager, StyleFlavor};

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(
    about = "Scaffold parcel-based web projects extended by remote script bundles",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize new project
    #[clap(visible_alias = "i")]
    Init {
        /// Project name to init
        name: String,
        /// Use less in the project
        #[arg(long, conflicts_with = "sass")]
        less: bool,
        /// Use sass in the project
        #[arg(long)]
        sass: bool,
        /// Use yarn instead of npm
        #[arg(long)]
        yarn: bool,
        /// Remote script bundle id to load (repeatable)
        #[arg(short = 'b', long = "bundle", value_name = "ID")]
        bundles: Vec<String>,
        /// Skip starting the dev server after scaffolding
        #[arg(long)]
        no_dev_server: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { name, less, sass, yarn, bundles, no_dev_server } => {
            let style = if less {
                StyleFlavor::Less
            } else if sass {
                StyleFlavor::Sass
            } else {
                StyleFlavor::Plain
            };
            let package_manager = if yarn { PackageManager::Yarn } else { PackageManager::Npm };

            sprig::init(InitOptions {
                name,
                style,
                package_manager,
                bundles,
                start_dev_server: !no_dev_server,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
