mod pdf;
mod text;

pub use pdf::to_pdf;
pub use text::to_text_buffer;
