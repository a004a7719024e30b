use tokio::net::TcpListener;
use tracing::info;
use crate::config::Config;
use crate::http::connection::Connection;

/// Accepts connections and hands each one to its own worker task.
///
/// Workers share nothing; every connection gets its own clone of the
/// file-serving config and runs the pipeline to completion.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);
    info!(
        "Serving files from {}",
        cfg.static_files.document_root.display()
    );

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let static_config = cfg.static_files.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, static_config);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
