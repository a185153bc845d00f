use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata bag produced by a template-introspection subsystem and handed
/// across the boundary. Rendering is template-agnostic today; these shapes
/// exist so a template-aware renderer can be layered on without touching
/// the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    #[serde(default)]
    pub page_count: usize,
    /// Detected font name -> sizes seen for that font.
    #[serde(default)]
    pub fonts: IndexMap<String, Vec<f64>>,
    /// Detected size (as printed) -> font names seen at that size.
    #[serde(default)]
    pub text_sizes: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub page_size: Option<PageSize>,
    #[serde(default)]
    pub margins: Option<Margins>,
    #[serde(default)]
    pub headers: Vec<HeaderSpan>,
    #[serde(default)]
    pub tables: Vec<TableRegion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// A text span found in the header band of a template page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderSpan {
    pub page: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRegion {
    pub page: usize,
    pub rows: usize,
    pub columns: usize,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let meta: TemplateMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.page_count, 0);
        assert!(meta.fonts.is_empty());
        assert!(meta.page_size.is_none());
    }

    #[test]
    fn test_round_trip() {
        let json = r#"{
            "page_count": 2,
            "fonts": {"Calibri": [11.0, 14.0]},
            "text_sizes": {"11.0": ["Calibri"]},
            "page_size": {"width": 612.0, "height": 792.0},
            "margins": {"top": 72.0, "bottom": 72.0, "left": 72.0, "right": 72.0},
            "headers": [{"page": 1, "text": "ACME", "x": 36.0, "y": 12.5}],
            "tables": [{"page": 1, "rows": 3, "columns": 2,
                        "bbox": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 50.0}}]
        }"#;
        let meta: TemplateMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.fonts.get("Calibri"), Some(&vec![11.0, 14.0]));
        assert_eq!(meta.tables[0].columns, 2);

        let back = serde_json::to_string(&meta).unwrap();
        let again: TemplateMetadata = serde_json::from_str(&back).unwrap();
        assert_eq!(again, meta);
    }
}
