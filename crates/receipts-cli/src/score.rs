use std::path::{Path, PathBuf};

use anyhow::Context;
use receipts_core::{score_breakdown, PointsBreakdown, Receipt};
use serde::{Deserialize, Serialize};

/// A receipt file holds either a single receipt or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReceiptFile {
    One(Receipt),
    Many(Vec<Receipt>),
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoredReceipt {
    pub source: PathBuf,
    pub retailer: String,
    pub breakdown: PointsBreakdown,
    pub points: u64,
}

pub(crate) fn load_receipts(path: &Path) -> anyhow::Result<Vec<Receipt>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: ReceiptFile = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a receipt or list of receipts", path.display()))?;
    Ok(match parsed {
        ReceiptFile::One(receipt) => vec![receipt],
        ReceiptFile::Many(receipts) => receipts,
    })
}

pub(crate) fn score_files(files: &[PathBuf]) -> anyhow::Result<Vec<ScoredReceipt>> {
    let mut scored = Vec::new();
    for path in files {
        let receipts = load_receipts(path)?;
        tracing::debug!(path = %path.display(), count = receipts.len(), "loaded receipts");
        scored.extend(receipts.into_iter().map(|receipt| {
            let breakdown = score_breakdown(&receipt);
            ScoredReceipt {
                source: path.clone(),
                retailer: receipt.retailer,
                points: breakdown.total(),
                breakdown,
            }
        }));
    }
    Ok(scored)
}

pub(crate) fn render_text(scored: &[ScoredReceipt]) -> String {
    scored
        .iter()
        .map(|s| {
            let b = &s.breakdown;
            format!(
                "{} ({}): {} points\n  retailer {:>4}\n  total {:>7}\n  items {:>7}\n  descriptions {}\n  date {:>8}\n  time {:>8}\n",
                s.retailer,
                s.source.display(),
                s.points,
                b.retailer,
                b.purchase_total,
                b.item_count,
                b.descriptions,
                b.purchase_date,
                b.purchase_time,
            )
        })
        .collect()
}

pub(crate) fn run_score(files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let scored = score_files(files)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        print!("{}", render_text(&scored));
    }
    Ok(())
}
