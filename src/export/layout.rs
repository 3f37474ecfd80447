//! Document structure, independent of the word-processor serialization.
//! Keeping layout as plain blocks lets the section/source rules be tested
//! without unpacking a zip archive.

use crate::pipeline::DictionaryEntry;

pub const DISCLAIMER: &str = "Nota: Este documento fue generado por un asistente de IA. \
     Verifica la información con fuentes académicas para un análisis más profundo.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
    Bullet(String),
    PageBreak,
}

fn heading(level: usize, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

/// Lays out one or more dictionary entries under a document title. Multiple
/// entries (the batch flow) are separated by page breaks. The "Fuentes"
/// heading is omitted entirely when an entry has no sources.
pub fn document_blocks(title: &str, entries: &[DictionaryEntry]) -> Vec<Block> {
    let mut blocks = vec![heading(0, title)];

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            blocks.push(Block::PageBreak);
        }

        blocks.push(heading(1, "Término"));
        blocks.push(Block::Paragraph(entry.term.clone()));

        for section in &entry.sections {
            blocks.push(heading(2, &section.heading));
            blocks.push(Block::Paragraph(section.text.clone()));
        }

        if !entry.sources.is_empty() {
            blocks.push(heading(1, "Fuentes"));
            for source in &entry.sources {
                blocks.push(Block::Bullet(source.clone()));
            }
        }
    }

    blocks.push(Block::Paragraph(DISCLAIMER.to_string()));
    blocks
}

/// `Definicion`, `Interés compuesto` → `Definicion_Interés_compuesto.docx`.
pub fn export_filename(prefix: &str, term: &str) -> String {
    format!("{prefix}_{}.docx", term.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::GeneratedSection;

    fn entry(term: &str, sections: Vec<(&str, &str)>, sources: Vec<&str>) -> DictionaryEntry {
        DictionaryEntry {
            term: term.to_string(),
            sections: sections
                .into_iter()
                .map(|(h, t)| GeneratedSection {
                    heading: h.to_string(),
                    text: t.to_string(),
                })
                .collect(),
            sources: sources.into_iter().map(String::from).collect(),
        }
    }

    fn bullets(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Bullet(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_source_list_omits_fuentes_heading() {
        let blocks = document_blocks("T", &[entry("Interés", vec![("Definición", "x")], vec![])]);
        assert!(!blocks.iter().any(|b| matches!(
            b,
            Block::Heading { text, .. } if text == "Fuentes"
        )));
        assert!(bullets(&blocks).is_empty());
    }

    #[test]
    fn n_sources_produce_n_bullets_with_their_urls() {
        let sources = vec!["T1: http://l1", "T2: http://l2", "T3: http://l3"];
        let blocks = document_blocks("T", &[entry("Interés", vec![], sources.clone())]);
        assert_eq!(bullets(&blocks), sources);
    }

    #[test]
    fn mises_scenario_layout() {
        // search returned S1/S2 with links L1/L2; generation returned T
        let e = entry(
            "Interés",
            vec![("Definición según Ludwig von Mises", "T")],
            vec!["R1: L1", "R2: L2"],
        );
        let blocks = document_blocks("Diccionario Económico - Escuela Austríaca de Economía", &[e]);

        let pos = blocks
            .iter()
            .position(|b| matches!(
                b,
                Block::Heading { text, .. } if text == "Definición según Ludwig von Mises"
            ))
            .unwrap();
        assert_eq!(blocks[pos + 1], Block::Paragraph("T".to_string()));

        let cited = bullets(&blocks);
        assert!(cited[0].contains("L1") && cited[1].contains("L2"));
    }

    #[test]
    fn batch_entries_are_page_separated_and_disclaimer_is_last() {
        let blocks = document_blocks(
            "T",
            &[entry("A", vec![], vec![]), entry("B", vec![], vec![])],
        );
        assert_eq!(
            blocks.iter().filter(|b| **b == Block::PageBreak).count(),
            1
        );
        assert_eq!(blocks.last(), Some(&Block::Paragraph(DISCLAIMER.to_string())));
    }

    #[test]
    fn filename_replaces_spaces() {
        assert_eq!(
            export_filename("Definicion", "Cálculo Económico"),
            "Definicion_Cálculo_Económico.docx"
        );
    }
}
