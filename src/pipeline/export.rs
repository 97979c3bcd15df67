//! Export document serialization and file writing.

use std::path::Path;
use tracing::{info, instrument};

use super::records::ExportDocument;
use crate::error::AppError;

/// Renders the export document as pretty-printed JSON: 2-space indentation,
/// non-ASCII characters written literally.
pub fn render_export(document: &ExportDocument) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Writes the export document to `path`, overwriting any existing file
/// unconditionally. Nothing is written until the whole document has been
/// rendered, so a failed run never leaves a partial export behind.
#[instrument(skip(document))]
pub async fn write_export(document: &ExportDocument, path: &Path) -> Result<(), AppError> {
    let rendered = render_export(document)?;

    tokio::fs::write(path, rendered)
        .await
        .map_err(|e| AppError::export_write(path.to_string_lossy(), e))?;

    info!("Export written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::records::{CompetitionRecord, MatchExport, TeamRecord};

    fn sample_document() -> ExportDocument {
        let mut document = ExportDocument::new();
        document.insert("2024-01-01".to_string(), vec![]);
        document.insert(
            "2024-01-02".to_string(),
            vec![MatchExport {
                name: "Malmö FF vs Häcken".to_string(),
                utc_time: "2024-01-02T18:00Z".to_string(),
                finished: true,
                competition: CompetitionRecord {
                    name: "Allsvenskan".to_string(),
                    logo: "l.png".to_string(),
                },
                home: TeamRecord {
                    name: "Malmö FF".to_string(),
                    logo: "m.png".to_string(),
                    shots: 14,
                    xg: 2.1,
                    score: Some(2),
                    played: 12,
                },
                away: TeamRecord {
                    name: "Häcken".to_string(),
                    logo: "h.png".to_string(),
                    shots: 6,
                    xg: 0.8,
                    score: Some(1),
                    played: 12,
                },
            }],
        );
        document
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let rendered = render_export(&sample_document()).unwrap();
        assert!(rendered.starts_with("{\n  \"2024-01-01\": []"));
        // Second nesting level sits at four spaces
        assert!(rendered.contains("\n    {\n"));
    }

    #[test]
    fn test_render_writes_non_ascii_literally() {
        let rendered = render_export(&sample_document()).unwrap();
        assert!(rendered.contains("Malmö FF"));
        assert!(rendered.contains("Häcken"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn test_render_keeps_empty_dates() {
        let rendered = render_export(&sample_document()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["2024-01-01"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_write_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");

        let document = sample_document();
        write_export(&document, &path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let reloaded: ExportDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, document);
    }

    #[tokio::test]
    async fn test_write_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");
        tokio::fs::write(&path, "stale content").await.unwrap();

        write_export(&sample_document(), &path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!content.contains("stale content"));
        assert!(content.starts_with('{'));
    }

    #[tokio::test]
    async fn test_write_export_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("matches.json");

        let result = write_export(&sample_document(), &path).await;
        assert!(matches!(result, Err(AppError::ExportWrite { .. })));
    }
}
