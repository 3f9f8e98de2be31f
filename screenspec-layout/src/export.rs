//! HTML export of a generated layout.

use tracing::debug;

use crate::layout::GeneratedLayout;

pub const HTML_MIME_TYPE: &str = "text/html";

/// A file handed to the host for saving. Nothing is written here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// The layout's markup as a downloadable HTML file named after its title.
pub fn export_as_file(layout: &GeneratedLayout) -> ExportFile {
    let filename = export_filename(&layout.title);
    let bytes = layout.markup.as_bytes().to_vec();
    debug!(%filename, bytes = bytes.len(), "layout exported");
    ExportFile {
        filename,
        mime_type: HTML_MIME_TYPE,
        bytes,
    }
}

/// `<title>.html`, with path separators, `:` and control characters replaced by `_`.
pub fn export_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(title: &str) -> GeneratedLayout {
        GeneratedLayout {
            title: title.into(),
            description: String::new(),
            markup: "<div>商品</div>".into(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn export_uses_title_and_markup() {
        let file = export_as_file(&layout("商品登録"));
        assert_eq!(file.filename, "商品登録.html");
        assert_eq!(file.mime_type, "text/html");
        assert_eq!(file.bytes, "<div>商品</div>".as_bytes());
    }

    #[test]
    fn unsafe_characters_replaced() {
        assert_eq!(export_filename("a/b\\c:d\ne"), "a_b_c_d_e.html");
        assert_eq!(export_filename("ユーザー 登録"), "ユーザー 登録.html");
    }
}
