//! Surface capture command

use clap::Args;
use std::path::PathBuf;
use strata_core::model::ExcludeList;

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Path to the introspection manifest (JSON)
    #[arg(long)]
    pub manifest: PathBuf,

    /// Version name override (defaults to the manifest's runtime version)
    #[arg(long)]
    pub name: Option<String>,

    /// Class-name prefix to exclude from the capture (repeatable)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    #[arg(long, default_value = "strata.db")]
    pub db: String,
}

pub fn execute(args: CaptureArgs) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = strata_store::manifest::parse_manifest_file(&args.manifest)?;
    let version_name = args
        .name
        .unwrap_or_else(|| manifest.runtime.version.clone());

    // Exclusion is the supplier's policy, applied before the core sees the pass
    let excludes = ExcludeList::new(args.exclude);
    let surface = excludes.apply(manifest.classes);

    tracing::debug!(
        version = %version_name,
        classes = surface.len(),
        "parsed surface manifest"
    );

    let mut conn = strata_store::db::open(&args.db)?;
    strata_store::db::configure(&conn)?;
    strata_store::migrations::apply_migrations(&mut conn)?;

    let captured_at = chrono::Utc::now().timestamp();
    let summary =
        strata_store::capture::capture_surface(&mut conn, &version_name, captured_at, &surface)?;

    println!("Surface captured:");
    println!("  version: {}", summary.version_name);
    println!("  classes: {}", summary.classes_seen);
    println!("  methods: {}", summary.methods_seen);
    if summary.version_existed {
        println!("  (version already captured - idempotent re-run)");
    }

    Ok(())
}
