use anyhow::{bail, Context, Result};
use log::{info, warn};
use shopunit::catalog::select_list;
use shopunit::pipeline::normalize_batch;
use shopunit::product::RawProduct;
use shopunit::profiles;
use std::collections::HashMap;
use std::env;
use std::fs;

/// A collaborator dump: the crawling layer's extraction of one shop's saved
/// shopping lists, keyed by list name.
type Dump = HashMap<String, Vec<RawProduct>>;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        bail!("usage: {} <retailer> <list-name> <dump.json>", args[0]);
    }
    let (retailer, list_name, dump_path) = (&args[1], &args[2], &args[3]);

    let profile = profiles::by_name(retailer)
        .with_context(|| format!("unknown retailer '{retailer}'"))?;

    info!("Normalizing list '{}' for {}", list_name, profile.name);

    let dump: Dump = serde_json::from_str(
        &fs::read_to_string(dump_path).with_context(|| format!("reading {dump_path}"))?,
    )
    .with_context(|| format!("parsing {dump_path}"))?;

    let raws = select_list(&dump, list_name)?;
    let (catalog, failures) = normalize_batch(profile, raws);

    // Per-product errors are surfaced, not fatal: a single unparseable
    // product must not lose the rest of the run.
    for (id, err) in &failures {
        warn!("Skipping product {}: {}", id, err);
    }

    for product in catalog.iter() {
        println!("{product}");
    }

    info!(
        "Normalized {} products ({} skipped)",
        catalog.len(),
        failures.len()
    );

    Ok(())
}
