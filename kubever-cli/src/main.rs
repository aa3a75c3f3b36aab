//! kubever CLI
//!
//! Reports the build version of the tool and, when a kubeconfig is
//! available, the version of the Kubernetes API server it points at.

// Use mimalloc as the global allocator
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kubever",
    author,
    version,
    about = "Build and cluster version reporting",
    long_about = "kubever prints its own build identity and, best effort, the version of the\n\
                  Kubernetes API server reachable through a kubeconfig.",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print kubever version
    Version(commands::version::VersionArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // kube builds its rustls config from the process default provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version(args) => commands::version::run(args).await,
    }
}
