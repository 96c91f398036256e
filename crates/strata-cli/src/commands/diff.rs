//! Surface diff command

use clap::Args;
use strata_core::diff;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old version name
    pub old: Option<String>,

    /// New version name
    pub new: Option<String>,

    #[arg(long, default_value = "strata.db")]
    pub db: String,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = strata_store::db::open(&args.db)?;
    strata_store::db::configure(&conn)?;
    strata_store::migrations::apply_migrations(&mut conn)?;

    let (old, new) = match (args.old, args.new) {
        (Some(old), Some(new)) => (old, new),
        (None, None) => {
            println!("Known versions:");
            for version in strata_store::queries::list_versions(&conn)? {
                println!("  {}", version.name);
            }
            return Ok(());
        }
        _ => return Err("diff requires either two version names or none".into()),
    };

    // Resolve both snapshots before emitting anything: a missing version
    // must fail without a partial report
    let old_surface = strata_store::reader::load_snapshot(&conn, &old)?;
    let new_surface = strata_store::reader::load_snapshot(&conn, &new)?;

    let result = diff::compute_diff(&old_surface, &new_surface);
    print!("{}", diff::human_summary::render(&result));

    Ok(())
}
