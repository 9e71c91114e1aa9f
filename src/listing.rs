//! The extracted listing record
//!
//! One [`Listing`] is produced per listing container found on a result page.
//! All fields except `timestamp` come straight from the page markup and are
//! left empty when the source element is absent.

use serde::{Deserialize, Serialize};

/// One extracted property record
///
/// Field values are plain display strings as they appear on the page
/// (e.g. `price` keeps its currency symbol, `area` its "sqft" suffix).
/// `timestamp` is the ISO-8601 instant at which the record was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub url: String,
    pub title: String,
    pub address: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub psf: String,
    pub agent_name: String,
    pub agent_url: String,
    pub timestamp: String,
}
