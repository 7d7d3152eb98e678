use anyhow::Result;

use dramlog_store::Store;

/// Print the reviewer roster in index order.
pub fn list_reviewers(store: &Store) -> Result<()> {
    let roster = store.load_all_reviewers()?;

    println!("\n👤 Reviewers ({})\n", roster.len());
    for r in &roster {
        println!("  {:<24}  {} [{}] ({})", r.display_name, r.kind, r.country, r.id);
        for link in &r.links {
            println!("      {}: {}", link.label, link.url);
        }
    }

    Ok(())
}
