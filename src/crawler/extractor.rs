//! Listing extraction from result-page markup
//!
//! Containers are located by the `data-listing-id` attribute, a stable
//! structural marker, rather than style-coupled class names. Every field is
//! extracted independently and tolerantly: a missing sub-element yields an
//! empty string for just that field, never an aborted listing.

use crate::listing::Listing;
use chrono::{SecondsFormat, Utc};
use scraper::{ElementRef, Html, Selector};

/// Extracts all listings from one page of markup, in document order
///
/// Never fails outward: markup without any listing container (or markup
/// that is not HTML at all) yields an empty vector, and a container whose
/// structure cannot be read is skipped and logged.
pub fn extract_listings(html: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);

    let container = match Selector::parse("div[data-listing-id]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let mut listings = Vec::new();
    for (index, element) in document.select(&container).enumerate() {
        match extract_listing(&element) {
            Some(listing) => listings.push(listing),
            None => tracing::warn!("Error parsing listing {}: missing listing id", index),
        }
    }

    tracing::info!("Extracted {} listings from page", listings.len());
    listings
}

/// Extracts one listing from its container element
///
/// Returns None only when the identifying attribute itself is unreadable;
/// every other field independently defaults to an empty string.
fn extract_listing(element: &ElementRef) -> Option<Listing> {
    let id = element.value().attr("data-listing-id")?.to_string();
    let (area, psf) = sniff_features(element);

    Some(Listing {
        id,
        url: select_attr(element, r#"a[href*="/listing/"]"#, "href"),
        title: select_text(element, "h3"),
        address: select_text(element, ".listing-address"),
        price: select_text(element, ".listing-price"),
        bedrooms: select_text(element, ".pgicon-bedroom + span"),
        bathrooms: select_text(element, ".pgicon-bathroom + span"),
        area,
        psf,
        agent_name: select_text(element, ".agent-name"),
        agent_url: select_attr(element, ".agent-name", "href"),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Disambiguates `area` and `psf` from the shared feature fragments
///
/// The fragments are short texts like "3 Bedrooms", "1,200 sqft",
/// "$850 psf". The first fragment containing "sqft" becomes the area, the
/// first containing "psf" becomes the psf; first match wins per field.
fn sniff_features(element: &ElementRef) -> (String, String) {
    let mut area = String::new();
    let mut psf = String::new();

    if let Ok(selector) = Selector::parse(".listing-feature-group li span") {
        for fragment in element.select(&selector) {
            let text = fragment.text().collect::<String>().trim().to_string();
            if area.is_empty() && text.contains("sqft") {
                area = text.clone();
            }
            if psf.is_empty() && text.contains("psf") {
                psf = text;
            }
        }
    }

    (area, psf)
}

/// Text of the first element matching `css` under `element`, trimmed
fn select_text(element: &ElementRef, css: &str) -> String {
    match Selector::parse(css) {
        Ok(selector) => element
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Attribute value of the first element matching `css` under `element`
fn select_attr(element: &ElementRef, css: &str, attr: &str) -> String {
    match Selector::parse(css) {
        Ok(selector) => element
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .unwrap_or_default()
            .to_string(),
        Err(_) => String::new(),
    }
}
