//! WebAssembly bindings for browser card input fields.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { card_entry, is_valid_cvv } from 'cc_input';
//!
//! await init();
//!
//! input.addEventListener('input', () => {
//!     const entry = card_entry(input.value);
//!     input.value = entry.display;
//!     input.maxLength = entry.max_length + entry.max_length / 4;
//!     icon.dataset.network = entry.icon;
//! });
//!
//! is_valid_cvv("123", 3);  // true
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::catalog::{self, NetworkDefinition};
use crate::entry::CardEntry;

fn lookup(network: &str) -> Result<&'static NetworkDefinition, JsValue> {
    catalog::find(network).ok_or_else(|| JsValue::from_str(&format!("Unknown network: {}", network)))
}

/// Catalog entry exposed to JavaScript.
#[wasm_bindgen]
pub struct NetworkInfo {
    inner: &'static NetworkDefinition,
}

#[wasm_bindgen]
impl NetworkInfo {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.inner.id().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn valid_lengths(&self) -> Vec<u8> {
        self.inner.valid_lengths().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn segment_layout(&self) -> Vec<u8> {
        self.inner.segment_layout().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn max_length(&self) -> usize {
        self.inner.max_length()
    }

    #[wasm_bindgen(getter)]
    pub fn cvv_length(&self) -> usize {
        self.inner.cvv_length()
    }

    #[wasm_bindgen(getter)]
    pub fn cvv_name(&self) -> String {
        self.inner.cvv_name().to_string()
    }
}

/// Snapshot of the card number field, returned to JavaScript.
#[wasm_bindgen]
pub struct CardEntryResult {
    entry: CardEntry,
}

#[wasm_bindgen]
impl CardEntryResult {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.entry.value().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.entry.display().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn icon(&self) -> String {
        self.entry.icon().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn max_length(&self) -> usize {
        self.entry.max_length()
    }

    #[wasm_bindgen(getter)]
    pub fn cvv_length(&self) -> usize {
        self.entry.cvv_length()
    }

    #[wasm_bindgen(getter)]
    pub fn empty(&self) -> bool {
        self.entry.is_empty()
    }

    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool {
        self.entry.is_complete()
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.entry.is_valid()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.entry.validate().err().map(|e| e.to_string())
    }
}

/// Computes the field snapshot for raw card number text.
///
/// # Example
/// ```javascript
/// const entry = card_entry("424242");
/// entry.display;  // "4242 42"
/// entry.icon;     // "visa"
/// ```
#[wasm_bindgen]
pub fn card_entry(raw: &str) -> CardEntryResult {
    CardEntryResult {
        entry: CardEntry::new(raw),
    }
}

/// Resolves the network for raw input. Never fails; unknown input yields
/// the default definition.
#[wasm_bindgen]
pub fn resolve_network(raw: &str) -> NetworkInfo {
    NetworkInfo {
        inner: crate::resolve::resolve(raw),
    }
}

/// Every network compatible with the input, most specific first.
#[wasm_bindgen]
pub fn matching_networks(raw: &str) -> js_sys::Array {
    crate::resolve::matching_networks(raw)
        .into_iter()
        .map(|inner| JsValue::from(NetworkInfo { inner }))
        .collect()
}

/// Resolves and formats in one call.
///
/// # Example
/// ```javascript
/// format_card("378282246310005")  // "3782 822463 10005"
/// ```
#[wasm_bindgen]
pub fn format_card(raw: &str) -> String {
    crate::format::format_card_number(raw)
}

/// Formats using a specific network's layout.
#[wasm_bindgen]
pub fn format_for_network(raw: &str, network: &str) -> Result<String, JsValue> {
    Ok(crate::format::format(raw, lookup(network)?))
}

/// Checks length and Luhn against a specific network.
#[wasm_bindgen]
pub fn is_valid_card_number(raw: &str, network: &str) -> Result<bool, JsValue> {
    Ok(crate::validate::is_valid_card_number(raw, lookup(network)?))
}

/// Checks a CVV against an exact expected length.
#[wasm_bindgen]
pub fn is_valid_cvv(cvv: &str, expected_length: usize) -> bool {
    crate::cvv::is_valid_cvv(cvv, expected_length)
}

/// Checks a CVV without network context (3 or 4 digits).
#[wasm_bindgen]
pub fn is_valid_cvv_any(cvv: &str) -> bool {
    crate::cvv::is_valid_cvv_any(cvv)
}

/// Generates a Luhn-valid test number for a network id.
///
/// # Example
/// ```javascript
/// generate_test_card("amex")  // "340000000000009"
/// ```
#[wasm_bindgen]
pub fn generate_test_card(network: &str) -> Result<String, JsValue> {
    Ok(crate::generate::CardGenerator::new(lookup(network)?).generate_deterministic())
}
