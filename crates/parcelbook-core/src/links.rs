//! External links: public cadastral map, listing links, photo albums

use crate::config::PhotoLink;
use crate::record::ParcelRecord;

/// Placeholder replaced by the cadastral id in map templates
pub const CADASTRAL_PLACEHOLDER: &str = "{cadastral}";

/// Public map search URL for the record's first cadastral sub-identifier
pub fn map_link(record: &ParcelRecord, template: &str) -> Option<String> {
    let primary = record.primary_cadastral();
    if primary.is_empty() {
        return None;
    }
    if template.contains(CADASTRAL_PLACEHOLDER) {
        Some(template.replace(CADASTRAL_PLACEHOLDER, &primary))
    } else {
        Some(format!("{}{}", template, primary))
    }
}

/// Normalise a user-entered listing link for opening.
///
/// `https://` is prepended unless an `http://` or `https://` scheme is
/// already present (any case).
pub fn external_link(raw: &str) -> Option<String> {
    let link = raw.trim();
    if link.is_empty() {
        return None;
    }
    let lower = link.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(link.to_string())
    } else {
        Some(format!("https://{}", link))
    }
}

/// First photo link whose keyword occurs in context, article, or region
pub fn photo_link<'a>(links: &'a [PhotoLink], record: &ParcelRecord) -> Option<&'a PhotoLink> {
    let haystacks = [
        record.context.as_text().to_lowercase(),
        record.article.as_text().to_lowercase(),
        record.region.as_text().to_lowercase(),
    ];
    links.iter().find(|link| {
        let keyword = link.keyword.trim().to_lowercase();
        !keyword.is_empty() && haystacks.iter().any(|h| h.contains(&keyword))
    })
}
