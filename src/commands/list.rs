// List command - list snippet ids

use anyhow::Result;

use crate::catalog::Catalog;
use crate::cli::ListArgs;

use super::truncate_str;

/// Render the listing for a catalog
pub fn render_list(catalog: &Catalog, args: &ListArgs) -> Result<String> {
    let catalog = match &args.filter {
        Some(pattern) => catalog.filtered(pattern),
        None => catalog.clone(),
    };

    if args.is_json() {
        let snippets: Vec<serde_json::Value> = catalog
            .all()
            .iter()
            .map(|snippet| {
                serde_json::json!({
                    "id": snippet.id(),
                    "description": snippet.description(),
                    "checked": snippet.expected().is_some(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(
            &serde_json::json!({ "snippets": snippets }),
        )?)
    } else {
        let width = catalog.ids().map(str::len).max().unwrap_or(0);
        let mut out = String::new();
        for snippet in catalog.all() {
            let description = snippet.description().unwrap_or("");
            let line = format!(
                "{:<width$}  {}",
                snippet.id(),
                truncate_str(description, 60),
                width = width
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
        Ok(out)
    }
}

pub fn handle_list(catalog: &Catalog, args: &ListArgs) -> Result<()> {
    print!("{}", render_list(catalog, args)?);
    Ok(())
}
