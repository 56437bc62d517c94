use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, trace};

use crate::config::RenderSettings;
use crate::document::{render_body, wrap_document};

pub async fn render(settings: &RenderSettings, fragment: bool) -> Result<()> {
    trace!("Entering render command");
    let clock = settings.clock();
    debug!("Rendering with {:?}, fragment: {}", clock, fragment);

    let body = render_body(clock).await;
    let output = if fragment {
        body
    } else {
        wrap_document(&body, settings)
    };

    if settings.writes_to_stdout() {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
        return Ok(());
    }

    let path = Path::new(&settings.output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(path, &output)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} bytes to {}", output.len(), path.display());
    Ok(())
}
