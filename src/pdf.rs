// Renders the shopping list into a PDF document.
// - The list is converted into a simple HTML string first.
// - The `printpdf` crate renders that HTML into the PDF bytes.
use html_escape::encode_text;
use log::debug;
use printpdf::{GeneratePdfOptions, PdfDocument};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::SearchError;
use crate::model::ShoppingListEntry;

// Simple HTML keeps the renderer happy; complex CSS and layouts are not
// supported well. One section per entry: title heading, bulleted ingredient
// lines, and a rule between sections but not after the last one.
fn shopping_list_html(entries: &[ShoppingListEntry]) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html><html><head><style>body { font-family: sans-serif; }</style></head><body>",
    );
    html.push_str("<h1>Shopping List</h1>");

    for (idx, entry) in entries.iter().enumerate() {
        html.push_str(&format!("<h2>{}</h2>", encode_text(&entry.recipe_title)));
        for item in &entry.ingredients {
            html.push_str(&format!("<p>\u{2022} {}</p>", encode_text(item)));
        }
        if idx != entries.len() - 1 {
            html.push_str("<hr/>");
        }
    }

    html.push_str("</body></html>");
    html
}

/// Write the shopping list as a PDF named `filename` in the current
/// directory and return the full path.
pub fn write_shopping_list_pdf(
    entries: &[ShoppingListEntry],
    filename: &str,
) -> Result<PathBuf, SearchError> {
    let html = shopping_list_html(entries);
    let mut warnings = Vec::new();

    // No images or extra fonts to embed, hence the empty maps.
    let doc = PdfDocument::from_html(
        &html,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| SearchError::PdfError(e.to_string()))?;

    if !warnings.is_empty() {
        debug!("PDF generation warnings: {:?}", warnings);
    }

    let mut save_warnings = Vec::new();
    let bytes = doc.save(&Default::default(), &mut save_warnings);
    if !save_warnings.is_empty() {
        debug!("PDF save warnings: {:?}", save_warnings);
    }

    let path = env::current_dir()?.join(filename);
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_sections_and_dividers() {
        let entries = vec![
            ShoppingListEntry::new("Soup", vec!["salt".to_string(), "water".to_string()]),
            ShoppingListEntry::new("Bread", vec!["flour".to_string()]),
        ];
        let html = shopping_list_html(&entries);

        assert!(html.contains("<h1>Shopping List</h1>"));
        assert!(html.contains("<h2>Soup</h2>"));
        assert!(html.contains("<h2>Bread</h2>"));
        assert!(html.contains("\u{2022} salt"));
        // one divider between the two sections, none after the last
        assert_eq!(html.matches("<hr/>").count(), 1);
        assert!(!html.trim_end_matches("</body></html>").ends_with("<hr/>"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let entries = vec![ShoppingListEntry::new(
            "Fish & Chips <special>",
            vec!["1 cup \"flour\"".to_string()],
        )];
        let html = shopping_list_html(&entries);

        assert!(html.contains("Fish &amp; Chips &lt;special&gt;"));
        assert!(!html.contains("<special>"));
    }

    #[test]
    fn test_empty_list_still_renders_header() {
        let html = shopping_list_html(&[]);
        assert!(html.contains("<h1>Shopping List</h1>"));
        assert!(!html.contains("<hr/>"));
    }
}
