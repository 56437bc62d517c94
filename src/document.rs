use common::Clock;

use crate::config::RenderSettings;

/// Server-render the page body with the given year source.
pub async fn render_body(clock: Clock) -> String {
    let body = frontend::render_to_string(clock).await;
    tracing::debug!("Rendered page body ({} bytes)", body.len());
    body
}

/// Wrap a rendered body in a standalone HTML document.
pub fn wrap_document(body: &str, settings: &RenderSettings) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <script src="{tailwind}"></script>
  </head>
  <body class="bg-zinc-950 text-zinc-100 antialiased">
{body}
  </body>
</html>
"#,
        title = escape_text(&settings.title),
        tailwind = escape_text(&settings.tailwind_url).replace('"', "&quot;"),
        body = body,
    )
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
