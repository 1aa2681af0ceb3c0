use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(rules: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(rules)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Title", "Description"]);

    for (i, rule) in catalog.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            rule.title.clone(),
            rule.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rules", catalog.len());

    Ok(())
}
