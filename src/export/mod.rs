pub mod docx;
pub mod layout;

pub use docx::render_docx;
pub use layout::{document_blocks, export_filename, Block};
