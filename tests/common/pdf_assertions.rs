use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Decoded content-stream operators of a page (1-based), in order
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<lopdf::content::Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// Strings drawn with `Tj` on a page, in paint order
pub fn page_strings(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    page_operations(doc, page_num)
        .into_iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first().and_then(|o| o.as_str().ok()).map(|s| String::from_utf8_lossy(s).to_string()))
        .collect()
}

/// Number of times `operator` occurs on a page
pub fn count_operator(doc: &LopdfDocument, page_num: u32, operator: &str) -> usize {
    page_operations(doc, page_num)
        .iter()
        .filter(|op| op.operator == operator)
        .count()
}

/// Base font names of every font dictionary in the document
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| dict.get(b"Type").and_then(|t| t.as_name()).ok() == Some(b"Font".as_slice()))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(|f| f.as_name()).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Number of image XObjects in the document
#[allow(dead_code)]
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|stream| {
            stream.dict.get(b"Subtype").and_then(|s| s.as_name()).ok() == Some(b"Image".as_slice())
        })
        .count()
}

#[macro_export]
macro_rules! assert_pdf_draws_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let strings = $crate::common::pdf_assertions::page_strings(&$pdf.doc, $page);
        assert!(
            strings.iter().any(|s| s == $text),
            "page {} does not draw {:?}; found {:?}",
            $page,
            $text,
            strings
        );
    };
}
