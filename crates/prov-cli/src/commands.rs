//! # Subcommand Handlers
//!
//! One `run_*` function per subcommand. Mutating handlers load the ledger
//! snapshot, run the transition engine with the explicit caller identity,
//! and write the snapshot back; query handlers load and read only. All
//! handlers print pretty JSON and return a process exit code.

use std::path::Path;

use anyhow::Context;
use clap::Args;

use prov_core::{OrgId, ProductId};
use prov_engine::{init_ledger, query, TransitionEngine};
use prov_ledger::{IdentityResolver, StaticIdentity};

use crate::snapshot;

/// Arguments for `prov create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Unique product identifier.
    pub product_id: String,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
}

/// Arguments for `prov transfer`.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Product identifier.
    pub product_id: String,
    /// Organization taking custody.
    pub to_org: String,
    /// Hand-off location.
    pub location: String,
}

/// Arguments for `prov receive`.
#[derive(Args, Debug)]
pub struct ReceiveArgs {
    /// Product identifier.
    pub product_id: String,
    /// Receipt location.
    pub location: String,
}

/// Arguments for subcommands addressing one product.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product identifier.
    pub product_id: String,
}

/// Arguments for `prov by-owner`.
#[derive(Args, Debug)]
pub struct ByOwnerArgs {
    /// Organization token to filter on.
    pub owner: String,
}

/// Seed the ledger with the initial record. Overwrites the seed key when
/// re-run.
pub fn run_init(ledger_path: &Path) -> anyhow::Result<u8> {
    let mut ledger = snapshot::load(ledger_path)?;
    let record = init_ledger(&mut ledger)?;
    snapshot::save(ledger_path, &ledger)?;
    print_json(&record)?;
    Ok(0)
}

/// Create a new custody record as the caller organization.
pub fn run_create(
    args: &CreateArgs,
    ledger_path: &Path,
    as_org: Option<&str>,
) -> anyhow::Result<u8> {
    let caller = resolve_identity(as_org)?;
    let product_id = ProductId::new(args.product_id.as_str())?;

    let ledger = snapshot::load(ledger_path)?;
    let mut engine = TransitionEngine::new(ledger);
    let record = engine.create(&caller, &product_id, &args.name, &args.description)?;
    snapshot::save(ledger_path, &engine.into_store())?;
    print_json(&record)?;
    Ok(0)
}

/// Transfer custody of a product to another organization.
pub fn run_transfer(
    args: &TransferArgs,
    ledger_path: &Path,
    as_org: Option<&str>,
) -> anyhow::Result<u8> {
    let caller = resolve_identity(as_org)?;
    let product_id = ProductId::new(args.product_id.as_str())?;
    let to_org = OrgId::new(args.to_org.as_str())?;

    let ledger = snapshot::load(ledger_path)?;
    let mut engine = TransitionEngine::new(ledger);
    let record = engine.transfer(&caller, &product_id, &to_org, &args.location)?;
    snapshot::save(ledger_path, &engine.into_store())?;
    print_json(&record)?;
    Ok(0)
}

/// Confirm physical custody of a product.
pub fn run_receive(
    args: &ReceiveArgs,
    ledger_path: &Path,
    as_org: Option<&str>,
) -> anyhow::Result<u8> {
    let caller = resolve_identity(as_org)?;
    let product_id = ProductId::new(args.product_id.as_str())?;

    let ledger = snapshot::load(ledger_path)?;
    let mut engine = TransitionEngine::new(ledger);
    let record = engine.receive(&caller, &product_id, &args.location)?;
    snapshot::save(ledger_path, &engine.into_store())?;
    print_json(&record)?;
    Ok(0)
}

/// Show one custody record.
pub fn run_show(args: &ProductArgs, ledger_path: &Path) -> anyhow::Result<u8> {
    let product_id = ProductId::new(args.product_id.as_str())?;
    let ledger = snapshot::load(ledger_path)?;
    print_json(&query::get_by_id(&ledger, &product_id)?)?;
    Ok(0)
}

/// Show a record's embedded event history.
pub fn run_history(args: &ProductArgs, ledger_path: &Path) -> anyhow::Result<u8> {
    let product_id = ProductId::new(args.product_id.as_str())?;
    let ledger = snapshot::load(ledger_path)?;
    print_json(&query::get_history(&ledger, &product_id)?)?;
    Ok(0)
}

/// List every record on the ledger.
pub fn run_list(ledger_path: &Path) -> anyhow::Result<u8> {
    let ledger = snapshot::load(ledger_path)?;
    let records = query::scan_all(&ledger)?.collect::<Result<Vec<_>, _>>()?;
    print_json(&records)?;
    Ok(0)
}

/// List records currently owned by one organization.
pub fn run_by_owner(args: &ByOwnerArgs, ledger_path: &Path) -> anyhow::Result<u8> {
    let owner = OrgId::new(args.owner.as_str())?;
    let ledger = snapshot::load(ledger_path)?;
    print_json(&query::get_by_owner(&ledger, &owner)?)?;
    Ok(0)
}

/// Show the store's per-key version log for a product.
pub fn run_versions(args: &ProductArgs, ledger_path: &Path) -> anyhow::Result<u8> {
    let product_id = ProductId::new(args.product_id.as_str())?;
    let ledger = snapshot::load(ledger_path)?;

    let versions: Vec<serde_json::Value> = query::get_version_history(&ledger, &product_id)?
        .into_iter()
        .map(|(version, record)| {
            Ok(serde_json::json!({
                "versionID": version.as_str(),
                "record": serde_json::to_value(&record)?,
            }))
        })
        .collect::<anyhow::Result<_>>()?;
    print_json(&versions)?;
    Ok(0)
}

/// Resolve the caller identity from the global `--as` flag.
fn resolve_identity(as_org: Option<&str>) -> anyhow::Result<OrgId> {
    let token = as_org.context("this command requires --as <org>")?;
    let resolver = StaticIdentity::new(OrgId::new(token)?);
    Ok(resolver.caller()?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
