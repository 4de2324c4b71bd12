use wotd_types::WordRecord;

use crate::Image;

/// Status text for a word.
///
/// Word, meaning, link and, when an image goes along, its credit, each
/// separated by a blank line.
pub fn compose_status(record: &WordRecord, with_image: bool) -> String {
    let mut text = format!("{}\n\n{}", record.word, record.meaning);

    if !record.link.is_empty() {
        text.push_str("\n\n");
        text.push_str(&record.link);
    }

    if with_image && !record.photo_attribution.is_empty() {
        text.push_str("\n\n📷 ");
        text.push_str(&record.photo_attribution);
    }

    text
}

/// Wrap fetched image bytes for `record`
pub fn image_for(record: &WordRecord, bytes: Vec<u8>) -> Image {
    let file_name = record
        .photo
        .rsplit('/')
        .next()
        .unwrap_or(&record.photo)
        .to_string();

    Image {
        bytes,
        mime: mime_for(&file_name).to_string(),
        file_name,
        description: record.word.clone(),
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
