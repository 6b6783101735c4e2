//! One-shot console report of the current quotes.

use std::io::Write;

use anyhow::{Context, Result};

use crate::{app::utils::format_brl, models::QuoteSnapshot, services::QuoteSource};

const RULE: &str = "═══════════════════════";

pub fn render_report(snapshot: &QuoteSnapshot) -> String {
    format!(
        "Cotações Atuais:\n\
         {RULE}\n\
         Dólar:   {}\n\
         Euro:    {}\n\
         Bitcoin: {}\n\
         {RULE}\n",
        format_brl(*snapshot.dollar_rate()),
        format_brl(*snapshot.euro_rate()),
        format_brl(*snapshot.bitcoin_rate()),
    )
}

/// Fetches once and writes the report to `out`. Nothing is written when the
/// fetch fails.
pub async fn run_report<S, W>(source: &S, out: &mut W) -> Result<()>
where
    S: QuoteSource + ?Sized,
    W: Write,
{
    let snapshot = source
        .fetch_snapshot()
        .await
        .context("Failed to fetch quotes")?;

    out.write_all(render_report(&snapshot).as_bytes())
        .context("Failed to write report")?;
    out.flush()?;

    Ok(())
}
