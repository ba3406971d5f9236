//! detect CLI - Send images to the YOLO detection backend
//!
//! ```bash
//! detect upload street.jpg                       # writes street.detected.jpg
//! detect upload street.jpg -o boxes.jpg          # explicit output path
//! detect --backend http://gpu-box:8000 upload street.jpg
//! detect endpoint                                # show the resolved upload URL
//! ```
//!
//! The backend origin can also be set with `DETECT_BACKEND_URL`, in the
//! environment or in a `.env` file.

use clap::{Parser, Subcommand};
use detect_cli::run_upload;
use detect_common::{BackendConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "detect")]
#[command(about = "Upload images to a YOLO object-detection backend", long_about = None)]
struct Cli {
    /// Backend origin
    #[arg(long, global = true, env = BACKEND_URL_ENV, default_value = DEFAULT_BACKEND_URL)]
    backend: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and save the annotated result
    Upload {
        /// Input image
        image: PathBuf,

        /// Output JPEG (default: <image stem>.detected.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the upload endpoint URL
    Endpoint,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = BackendConfig::new(cli.backend);

    let result = match cli.command {
        Commands::Upload { image, output } => run_upload(&config, &image, output.as_deref())
            .await
            .map(|path| {
                eprintln!("✨ Annotated image written to: {}", path.display());
                println!("{}", path.display());
            }),

        Commands::Endpoint => {
            println!("{}", config.upload_url());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
