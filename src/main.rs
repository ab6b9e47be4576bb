use anyhow::Result;
use fdbstatus::config::AppConfig;
use fdbstatus::status_repo::StatusRepo;
use fdbstatus::store::FdbStore;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = AppConfig::load()?;

    // Network thread stops when the guard drops at the end of main.
    let network = unsafe { foundationdb::boot() };

    let store = FdbStore::open(app_config.cluster.cluster_file.as_deref())
        .map_err(|e| anyhow::anyhow!("open database: {}", e))?;
    let repo = StatusRepo::new(store, &app_config.transaction);

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received interrupt, cancelling status read");
            on_signal.cancel();
        }
    });

    let status = repo.get_status(&cancel).await?;
    tracing::info!(
        read_version = status.read_version,
        processes = status.cluster.processes.len(),
        machines = status.cluster.machines.len(),
        "status snapshot"
    );
    println!("{}", serde_json::to_string_pretty(&status)?);

    drop(repo);
    drop(network);
    Ok(())
}
