use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use super::layout::Block;
use crate::error::PipelineError;

const BULLET_NUMBERING: usize = 1;

fn heading_style(level: usize) -> &'static str {
    match level {
        0 => "Title",
        1 => "Heading1",
        _ => "Heading2",
    }
}

/// Serializes laid-out blocks into a `.docx` byte buffer.
pub fn render_docx(blocks: &[Block]) -> Result<Vec<u8>, PipelineError> {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(48)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(36)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(30)
                .bold(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    for block in blocks {
        docx = match block {
            Block::Heading { level, text } => docx.add_paragraph(
                Paragraph::new()
                    .style(heading_style(*level))
                    .add_run(Run::new().add_text(text.as_str())),
            ),
            Block::Paragraph(text) => docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str()))),
            Block::Bullet(text) => docx.add_paragraph(
                Paragraph::new()
                    .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
                    .add_run(Run::new().add_text(text.as_str())),
            ),
            Block::PageBreak => docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
        };
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| PipelineError::Export(e.to_string()))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_zip_archive() {
        let blocks = vec![
            Block::Heading {
                level: 0,
                text: "Diccionario".into(),
            },
            Block::Paragraph("Texto".into()),
            Block::Bullet("Fuente: http://x".into()),
            Block::PageBreak,
        ];
        let bytes = render_docx(&blocks).unwrap();
        // .docx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }
}
