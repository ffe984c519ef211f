//! homescout server binary.
//!
//! Reads `config.toml` (or the path given with `--config`, with
//! `HOMESCOUT_`-prefixed environment overrides), opens an in-process
//! SQLite store, and serves the site API over HTTP.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `admin_password_hash`:
//!
//! ```
//! homescout hash-password
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use chrono::Utc;
use clap::{Parser, Subcommand};
use homescout_core::{catalog, intent::IntentCatalog, store::{AreaQuery, SiteStore}};
use homescout_server::{AppState, ServerConfig, auth::AdminAuth};
use homescout_sitemap::{enumerate, write_xml};
use homescout_store_sqlite::SqliteStore;
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Homescout lead-gen backend")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Run the HTTP server (the default).
  Serve,
  /// Load the built-in location and intent catalog into the store.
  Seed,
  /// Enumerate the full sitemap and write it to a file.
  Sitemap {
    /// Output path for the XML document.
    #[arg(long, default_value = "sitemap.xml")]
    out: PathBuf,
  },
  /// Print the argon2 hash for a password entered on stdin and exit.
  HashPassword,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Helper mode: no config or store needed.
  if matches!(cli.command, Some(Command::HashPassword)) {
    let password = read_password()?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?
      .to_string();
    println!("{hash}");
    return Ok(());
  }

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("HOMESCOUT"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = SqliteStore::open(&server_cfg.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.db_path))?;

  match cli.command {
    Some(Command::Seed) => seed(&store).await,
    Some(Command::Sitemap { out }) => {
      sitemap_to_file(&store, &server_cfg, &out).await
    }
    Some(Command::HashPassword) => unreachable!("handled above"),
    Some(Command::Serve) | None => serve(store, server_cfg).await,
  }
}

// ─── Serve ───────────────────────────────────────────────────────────────────

async fn serve(store: SqliteStore, server_cfg: ServerConfig) -> anyhow::Result<()> {
  let catalog = load_catalog(&store).await?;

  let state = AppState {
    store:   Arc::new(store),
    auth:    Arc::new(AdminAuth {
      username:      server_cfg.admin_username.clone(),
      password_hash: server_cfg.admin_password_hash.clone(),
    }),
    catalog: Arc::new(catalog),
    config:  Arc::new(server_cfg.clone()),
  };

  let app = homescout_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Load all intents from the store and build the keyword index,
/// failing fast on a keyword claimed by two active intents.
async fn load_catalog(store: &SqliteStore) -> anyhow::Result<IntentCatalog> {
  let intents = store
    .list_intents()
    .await
    .context("failed to load intents")?;
  let catalog =
    IntentCatalog::new(intents).context("intent catalog is inconsistent")?;
  if catalog.is_empty() {
    tracing::warn!("intent catalog is empty; run `homescout seed` to load it");
  }
  Ok(catalog)
}

// ─── Seed ────────────────────────────────────────────────────────────────────

async fn seed(store: &SqliteStore) -> anyhow::Result<()> {
  let mut upserted = 0usize;
  for intent in catalog::seed_intents() {
    store
      .upsert_intent(intent)
      .await
      .context("failed to upsert intent")?;
    upserted += 1;
  }

  let mut inserted = 0usize;
  let mut skipped = 0usize;
  for area in catalog::seed_areas() {
    match store.insert_area(area).await {
      Ok(()) => inserted += 1,
      // Already seeded; leave the stored document alone.
      Err(homescout_store_sqlite::Error::DuplicateSlug(_)) => skipped += 1,
      Err(e) => return Err(e).context("failed to insert area"),
    }
  }

  tracing::info!(
    intents = upserted,
    areas = inserted,
    skipped,
    "seed complete"
  );
  Ok(())
}

// ─── Sitemap ─────────────────────────────────────────────────────────────────

async fn sitemap_to_file(
  store:      &SqliteStore,
  server_cfg: &ServerConfig,
  out:        &Path,
) -> anyhow::Result<()> {
  let catalog = load_catalog(store).await?;
  let areas = store
    .list_areas(&AreaQuery::published())
    .await
    .context("failed to list areas")?;

  let keywords = catalog.keyword_universe();
  let urls = enumerate(
    &server_cfg.base_url,
    &areas,
    &keywords,
    Utc::now().date_naive(),
  );
  let xml = write_xml(&urls);

  std::fs::write(out, &xml)
    .with_context(|| format!("failed to write {}", out.display()))?;
  tracing::info!(urls = urls.len(), out = %out.display(), "sitemap written");
  Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Read a password from stdin.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}
