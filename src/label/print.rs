//! Printable HTML view of a label

use crate::barcode::BarcodeArtifact;
use crate::exceptions::Result;
use crate::utils::escape_html;
use anyhow::Context;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Build a standalone HTML page showing the label image, its title and
/// optional key/value rows. The page opens the print dialog on load.
pub fn render_print_document(
    artifact: &BarcodeArtifact,
    title: &str,
    metadata: &[(String, String)],
) -> String {
    let title = escape_html(title);

    let rows: String = metadata
        .iter()
        .map(|(key, value)| {
            format!(
                "        <tr><th>{}</th><td>{}</td></tr>\n",
                escape_html(key),
                escape_html(value)
            )
        })
        .collect();

    let table = if rows.is_empty() {
        String::new()
    } else {
        format!("      <table class=\"meta\">\n{rows}      </table>\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
      body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; text-align: center; }}
      .label {{ display: inline-block; border: 1px solid #000; padding: 16px; }}
      h2 {{ margin: 0 0 12px 0; font-size: 18px; }}
      img {{ display: block; margin: 0 auto; }}
      table.meta {{ margin: 12px auto 0 auto; border-collapse: collapse; font-size: 12px; text-align: left; }}
      table.meta th {{ padding: 2px 8px 2px 0; }}
      table.meta td {{ padding: 2px 0; }}
      @media print {{ body {{ padding: 0; }} .label {{ border: none; }} }}
    </style>
  </head>
  <body onload="window.print()">
    <div class="label">
      <h2>{title}</h2>
      <img src="{src}" width="{width}" height="{height}" alt="{title}">
{table}    </div>
  </body>
</html>
"#,
        title = title,
        src = artifact.to_data_url(),
        width = artifact.width,
        height = artifact.height,
        table = table,
    )
}

/// Write the print document to a persisted temporary `.html` file and
/// return its path for a browser to open.
pub fn open_print_view(
    artifact: &BarcodeArtifact,
    title: &str,
    metadata: &[(String, String)],
) -> Result<PathBuf> {
    let document = render_print_document(artifact, title, metadata);

    let mut file = tempfile::Builder::new()
        .prefix("ttarius-label-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(document.as_bytes())?;
    file.flush()?;

    let (_, path) = file
        .keep()
        .context("Failed to keep print view file")?;
    debug!("🖨️ Print view written: {}", path.display());
    Ok(path)
}

/// Parse `key=value` strings into metadata rows
pub fn parse_metadata(pairs: &[String]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (pair.trim().to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::generate_shipment_barcode;
    use std::fs;

    #[test]
    fn test_document_embeds_image_and_title() {
        let artifact = generate_shipment_barcode("88");
        let html = render_print_document(&artifact, "Shipment SHP-88", &[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Shipment SHP-88</title>"));
        assert!(html.contains("src=\"data:image/png;base64,"));
        assert!(html.contains("width=\"300\" height=\"100\""));
        assert!(html.contains("window.print()"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_document_metadata_rows_are_escaped() {
        let artifact = generate_shipment_barcode("88");
        let metadata = vec![
            ("Customer".to_string(), "Ana <VIP>".to_string()),
            ("Weight".to_string(), "2.5 kg".to_string()),
        ];
        let html = render_print_document(&artifact, "A & B", &metadata);

        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<tr><th>Customer</th><td>Ana &lt;VIP&gt;</td></tr>"));
        assert!(html.contains("<tr><th>Weight</th><td>2.5 kg</td></tr>"));
    }

    #[test]
    fn test_open_print_view_writes_file() {
        let artifact = generate_shipment_barcode("5");
        let path = open_print_view(&artifact, "Label", &[]).unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<h2>Label</h2>"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_parse_metadata() {
        let pairs = vec![
            "Customer = Ana".to_string(),
            "Route=MIA=>SDQ".to_string(),
            "Fragile".to_string(),
        ];
        assert_eq!(
            parse_metadata(&pairs),
            vec![
                ("Customer".to_string(), "Ana".to_string()),
                ("Route".to_string(), "MIA=>SDQ".to_string()),
                ("Fragile".to_string(), String::new()),
            ]
        );
    }
}
