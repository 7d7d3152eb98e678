use anyhow::Result;

use dramlog_store::Store;

/// Print the bottle listing, one line per bottle.
pub fn list_bottles(store: &Store) -> Result<()> {
    let summaries = store.load_bottle_summaries()?;

    println!("\n🥃 Bottles ({})\n", summaries.len());
    println!(
        "  {:>8}  {:>5}  {:>5}  {:<7}  {}",
        "tastings", "rated", "avg", "stars", "bottle"
    );

    for s in &summaries {
        let avg = s
            .avg_overall_1to10
            .map_or_else(|| "-".to_string(), |v| format!("{v:.1}"));
        let stars: String = (1..=5u8)
            .map(|b| {
                let n = s.dist_stars_1to5.count(b);
                if n > 0 { '▮' } else { '▯' }
            })
            .collect();
        println!(
            "  {:>8}  {:>5}  {:>5}  {:<7}  {}  ({})",
            s.tasting_count, s.rated_count, avg, stars, s.bottle.name, s.bottle.slug
        );
    }

    Ok(())
}

/// Print one bottle's detail view with its tasting list.
pub fn show_bottle(store: &Store, slug: &str) -> Result<()> {
    let detail = store.load_bottle_detail(slug)?;

    println!("\n🥃 {}", detail.bottle.name);
    println!("  key:  {}", detail.bottle.key);
    println!("  slug: {}", detail.bottle.slug);
    if let Some(category) = &detail.bottle.category {
        println!("  category: {category}");
    }
    if let Some(age) = detail.bottle.age_years {
        println!("  age: {age} years");
    }

    if detail.tastings.is_empty() {
        println!("\n  No tastings on file.");
        return Ok(());
    }

    println!("\n  Tastings ({}):", detail.tastings.len());
    for t in &detail.tastings {
        let score = t
            .overall_1to10
            .map_or_else(|| "unrated".to_string(), |v| format!("{v:.1}/10"));
        let who = t.contributor_name.as_deref().unwrap_or("unknown");
        println!("    {:<10}  {}  ({})", score, who, t.file_rel_path);
    }

    Ok(())
}
