//! Command-line client for the regional photo gallery.
//!
//!   gallery list baku
//!   gallery upload baku ./photo.jpg
//!   gallery --server http://gallery.local:3000 list ganja

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gallery_client::models::{GalleryView, ImageFile, UploadStatus};
use gallery_client::{GalleryClient, HttpGalleryApi, RegionTabs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI client for the gallery service
#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Command-line client for the regional photo gallery", long_about = None)]
struct Cli {
    /// Gallery service base URL
    #[arg(short, long, env = "GALLERY_SERVER", default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the image URLs of a region
    List {
        /// Region identifier, e.g. baku
        region: String,
    },

    /// Upload an image to a region
    Upload {
        /// Region identifier, e.g. baku
        region: String,

        /// Image file to upload
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpGalleryApi::new(&cli.server).context("Invalid --server")?;

    match cli.command {
        Commands::List { region } => {
            let tabs = RegionTabs::new([region.as_str()], Some(region.as_str()))?;
            let mut client = GalleryClient::new(api, tabs);
            client.start().await;

            match client.view(&region) {
                GalleryView::Images(images) => {
                    for image in images {
                        println!("{}", image.src);
                    }
                }
                GalleryView::Failed => bail!(
                    "{}",
                    GalleryView::Failed.message().unwrap_or_default()
                ),
                other => println!("{}", other.message().unwrap_or_default()),
            }
        }
        Commands::Upload { region, path } => {
            let file = ImageFile::from_path(&path).await?;
            let tabs = RegionTabs::new([region.as_str()], Some(region.as_str()))?;
            let mut client = GalleryClient::new(api, tabs);
            client.form_mut().set_region(region.as_str());
            client.form_mut().set_file(file);

            let status = client.submit_upload().await.clone();
            if let UploadStatus::Failed(_) = status {
                bail!("{}", status.text());
            }
            println!("{}", status.text());
            println!("{} image(s) in {}", client.view(&region).images().len(), region);
        }
    }

    Ok(())
}
