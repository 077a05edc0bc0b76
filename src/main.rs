use std::fs;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sunbula::config::ServerConfig;
use sunbula::media::MediaStore;
use sunbula::server::{AppState, LogMailer, create_router};
use sunbula::store::{SqliteStore, Store};

#[cfg(unix)]
fn set_restrictive_permissions(path: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!("Failed to set permissions on {}: {e}", path.display());
    }
}

#[derive(Parser)]
#[command(name = "sunbula")]
#[command(about = "A bilingual catalog CMS backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "5500")]
        port: u16,

        /// Data directory for database and uploaded images
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Public base URL for external access (e.g., "https://admin.example.com").
        /// When set, stored image references are absolute URLs; otherwise
        /// they are root-relative paths.
        #[arg(long)]
        public_base_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Initialize the database and seed the admin credential
    Init {
        /// Data directory for database and uploaded images
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Username for the admin credential
        #[arg(long, default_value = "admin")]
        username: String,
    },
}

fn generate_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect()
}

fn run_init(data_dir: String, username: String) -> anyhow::Result<()> {
    let data_path: std::path::PathBuf = data_dir.into();
    fs::create_dir_all(&data_path)?;

    let store = SqliteStore::new(data_path.join("sunbula.db"))?;
    store.initialize()?;

    let credentials_file = data_path.join(".admin_credentials");

    if store.has_admin_user()? {
        bail!(
            "Server already initialized. Admin credential exists; password file was written to: {}",
            credentials_file.display()
        );
    }

    let password = generate_password();
    store.create_admin_user(&username, &sunbula::server::auth::hash_password(&password))?;
    fs::write(&credentials_file, &password)?;

    #[cfg(unix)]
    set_restrictive_permissions(&credentials_file);

    println!();
    println!("========================================");
    println!("Admin credential for '{username}' (save this, it won't be shown again):");
    println!();
    println!("  {password}");
    println!();
    println!("Password also written to: {}", credentials_file.display());
    println!("========================================");
    println!();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sunbula=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init { data_dir, username } => {
                run_init(data_dir, username)?;
            }
        },
        Commands::Serve {
            host,
            port,
            data_dir,
            public_base_url,
        } => {
            let config = ServerConfig {
                host,
                port,
                data_dir: data_dir.into(),
                public_base_url,
            };

            fs::create_dir_all(&config.data_dir)?;

            let store = SqliteStore::new(config.db_path())?;
            store.initialize()?;

            if !store.has_admin_user()? {
                tracing::warn!(
                    "No admin credential found; run 'sunbula admin init' to create one. \
                     Login will reject all attempts until then."
                );
            }

            let media = MediaStore::new(&config.data_dir, config.public_base_url.clone());
            fs::create_dir_all(media.uploads_dir())?;

            let state = Arc::new(AppState {
                store: Arc::new(store),
                media,
                mailer: Arc::new(LogMailer),
            });

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
