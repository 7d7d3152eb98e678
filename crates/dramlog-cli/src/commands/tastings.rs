use anyhow::Result;

use dramlog_store::Store;

/// Print the expert tasting listing, optionally filtered by
/// contributor id.
pub fn list_tastings(store: &Store, contributor: Option<&str>) -> Result<()> {
    let rows = match contributor {
        Some(id) => store.expert_tastings_by_contributor(id)?,
        None => store.load_expert_tastings()?,
    };

    match contributor {
        Some(id) => println!("\n📋 Expert tastings for {id} ({})\n", rows.len()),
        None => println!("\n📋 Expert tastings ({})\n", rows.len()),
    }

    for row in &rows {
        let label = row.whisky_label.as_deref().unwrap_or("<unlabelled>");
        let who = row.contributor_name.as_deref().unwrap_or("unknown");
        println!("  {:<40}  {}  ({})", label, who, row.file_rel_path);
    }

    Ok(())
}
