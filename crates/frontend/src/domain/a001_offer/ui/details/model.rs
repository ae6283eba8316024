//! Page data supplied by the server.

use crate::shared::dom::script_text;
use contracts::domain::a001_offer::OfferBootstrap;

/// `<script id="offer-bootstrap" type="application/json">`
pub const BOOTSTRAP_SCRIPT_ID: &str = "offer-bootstrap";

/// Read the embedded offer. A missing or broken block yields an empty new
/// offer so the form is still usable.
pub fn load_bootstrap() -> OfferBootstrap {
    let Some(raw) = script_text(BOOTSTRAP_SCRIPT_ID) else {
        log::warn!("No #{} element, starting with an empty offer", BOOTSTRAP_SCRIPT_ID);
        return OfferBootstrap::default();
    };

    match OfferBootstrap::from_json(&raw) {
        Ok(data) => data,
        Err(e) => {
            log::error!("{}", e);
            OfferBootstrap::default()
        }
    }
}
