// src/tools/catalog.rs — The fixed set of tools shown on the home screen

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Feather icon name.
    pub icon: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub static TOOLS: [Tool; 5] = [
    Tool {
        id: "summary",
        name: "Summary AI",
        description: "Notes to smart summaries",
        icon: "file-text",
        color: "#4F46E5",
        bg_color: "#EEF2FF",
    },
    Tool {
        id: "pdf-merge",
        name: "PDF Merge",
        description: "Combine multiple PDFs",
        icon: "layers",
        color: "#EA580C",
        bg_color: "#FFF7ED",
    },
    Tool {
        id: "pdf-compress",
        name: "PDF Compress",
        description: "Reduce PDF file size",
        icon: "minimize-2",
        color: "#059669",
        bg_color: "#ECFDF5",
    },
    Tool {
        id: "resume",
        name: "Resume Fix",
        description: "AI-powered resume improver",
        icon: "briefcase",
        color: "#DB2777",
        bg_color: "#FDF2F8",
    },
    Tool {
        id: "bg-remove",
        name: "BG Remover",
        description: "Remove image backgrounds",
        icon: "image",
        color: "#7C3AED",
        bg_color: "#F5F3FF",
    },
];

/// Look up a tool by id.
pub fn find(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = TOOLS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOOLS.len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("resume").map(|t| t.name), Some("Resume Fix"));
        assert!(find("ocr").is_none());
    }
}
