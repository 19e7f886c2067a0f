// WASM bindings for the typo spell checker.
//
// Provides a `WasmTypo` class exported via wasm-bindgen that wraps the
// `TypoHandle` from typo-spell. Inputs are raw texts the host has already
// fetched; loading may be staged, so each text can be handed over as soon
// as it arrives. Detailed suggestions are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const typo = WasmTypo.load(affText, dicText, wordlistText);
//   typo.check("hello");             // => true
//   typo.suggest("helo");            // => ["hello", "help", ...]
//   typo.suggestDetailed("helo");    // => [{ word: "hello", distance: 1, weight: 500 }, ...]
//   typo.hasFlag("damn", "NOSUGGEST");
//
//   // or staged:
//   const typo = new WasmTypo();
//   typo.setDictionaryData(dicText);
//   typo.setAffixData(affText);      // loaded from here on

use serde::Serialize;
use wasm_bindgen::prelude::*;

use typo_spell::suggestion::Suggestion;
use typo_spell::{TypoError, TypoHandle};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a ranked suggestion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion {
    word: String,
    distance: usize,
    weight: f64,
}

impl From<Suggestion> for JsSuggestion {
    fn from(s: Suggestion) -> Self {
        Self {
            word: s.word,
            distance: s.distance,
            weight: s.weight,
        }
    }
}

/// Serializable snapshot of the engine options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsOptions {
    max_edit_distance: usize,
    max_suggestions: usize,
    cache_size: u32,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn typo_error_to_js(e: TypoError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js_suggestions(suggestions: Vec<Suggestion>) -> Vec<JsSuggestion> {
    suggestions.into_iter().map(JsSuggestion::from).collect()
}

// ============================================================================
// WasmTypo
// ============================================================================

/// Affix-driven spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmTypo {
    handle: TypoHandle,
}

impl Default for WasmTypo {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmTypo {
    /// Create an empty instance. Checks fail until both affix and
    /// dictionary data are supplied.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTypo {
        WasmTypo {
            handle: TypoHandle::new(),
        }
    }

    /// Create a loaded instance in one step.
    ///
    /// - `aff_data`: contents of the `.aff` file
    /// - `dic_data`: contents of the `.dic` file
    /// - `wordlist`: optional `word<TAB>frequency` list
    pub fn load(aff_data: &str, dic_data: &str, wordlist: Option<String>) -> Result<WasmTypo, JsError> {
        let handle = TypoHandle::load(aff_data, dic_data, wordlist.as_deref()).map_err(typo_error_to_js)?;
        Ok(WasmTypo { handle })
    }

    // =========================================================================
    // Staged loading
    // =========================================================================

    /// Compile affix data. On error the previous rules stay in place.
    #[wasm_bindgen(js_name = "setAffixData")]
    pub fn set_affix_data(&mut self, text: &str) -> Result<(), JsError> {
        self.handle.set_affix_data(text).map_err(typo_error_to_js)
    }

    #[wasm_bindgen(js_name = "setDictionaryData")]
    pub fn set_dictionary_data(&mut self, text: &str) {
        self.handle.set_dictionary_data(text);
    }

    /// Install a `word<TAB>frequency` list used to break ranking ties.
    #[wasm_bindgen(js_name = "setWordlist")]
    pub fn set_wordlist(&mut self, text: &str) {
        self.handle.set_wordlist(text);
    }

    /// Install prefix normalization rules (`prefix<TAB>replacement<TAB>condition`).
    #[wasm_bindgen(js_name = "setPrefixRules")]
    pub fn set_prefix_rules(&mut self, text: &str) {
        self.handle.set_prefix_rules(text);
    }

    /// Whether both affix and dictionary data have been supplied.
    #[wasm_bindgen(js_name = "isLoaded")]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_loaded()
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Check whether a word is correctly spelled.
    pub fn check(&self, word: &str) -> Result<bool, JsError> {
        self.handle.check(word).map_err(typo_error_to_js)
    }

    /// Generate spelling suggestions, best first.
    ///
    /// `limit` defaults to the configured maximum number of suggestions.
    pub fn suggest(&self, word: &str, limit: Option<usize>) -> Result<Vec<String>, JsError> {
        let limit = limit.unwrap_or(self.handle.options().max_suggestions);
        self.handle.suggest(word, limit).map_err(typo_error_to_js)
    }

    /// Like `suggest`, returning objects with fields `word`, `distance`,
    /// and `weight`.
    #[wasm_bindgen(js_name = "suggestDetailed")]
    pub fn suggest_detailed(&self, word: &str, limit: Option<usize>) -> Result<JsValue, JsError> {
        let limit = limit.unwrap_or(self.handle.options().max_suggestions);
        let suggestions = self.handle.suggest_detailed(word, limit).map_err(typo_error_to_js)?;
        serde_wasm_bindgen::to_value(&to_js_suggestions(suggestions)).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Whether a dictionary entry for `word` carries the code assigned to
    /// the directive `flag` (e.g. `"NOSUGGEST"`).
    #[wasm_bindgen(js_name = "hasFlag")]
    pub fn has_flag(&self, word: &str, flag: &str) -> Result<bool, JsError> {
        self.handle.has_flag(word, flag).map_err(typo_error_to_js)
    }

    /// Every surface form derived from the dictionary stem `stem`.
    pub fn expand(&self, stem: &str) -> Result<Vec<String>, JsError> {
        self.handle.expand(stem).map_err(typo_error_to_js)
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Current options as `{ maxEditDistance, maxSuggestions, cacheSize }`.
    pub fn options(&self) -> Result<JsValue, JsError> {
        let options = self.handle.options();
        let js = JsOptions {
            max_edit_distance: options.max_edit_distance,
            max_suggestions: options.max_suggestions,
            cache_size: options.cache_size,
        };
        serde_wasm_bindgen::to_value(&js).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Set the maximum edit distance of suggestions.
    #[wasm_bindgen(js_name = "setMaxEditDistance")]
    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.handle.set_max_edit_distance(value);
    }

    /// Set the default number of suggestions to return.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    /// Replace the result caches with new ones of the given size parameter.
    /// Oversized values are clamped.
    #[wasm_bindgen(js_name = "setCacheSize")]
    pub fn set_cache_size(&mut self, size: u32) {
        self.handle.set_cache_size(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFF: &str = "SFX AB Y 2\nSFX AB 0 0 .\nSFX AB 0 s .\n";

    #[test]
    fn suggestion_dto_uses_camel_case_fields() {
        let dto = JsSuggestion::from(Suggestion {
            word: "hello".to_string(),
            distance: 1,
            weight: 500.0,
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({ "word": "hello", "distance": 1, "weight": 500.0 }));
    }

    #[test]
    fn options_dto_uses_camel_case_fields() {
        let dto = JsOptions {
            max_edit_distance: 2,
            max_suggestions: 5,
            cache_size: 0,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["maxEditDistance"], 2);
        assert_eq!(json["maxSuggestions"], 5);
        assert_eq!(json["cacheSize"], 0);
    }

    #[test]
    fn staged_instance_wraps_handle() {
        let mut typo = WasmTypo::new();
        assert!(!typo.is_loaded());
        typo.set_dictionary_data("cat/AB\n");
        typo.handle.set_affix_data(AFF).unwrap();
        assert!(typo.is_loaded());
        assert_eq!(typo.handle.suggest("cta", 5).unwrap(), vec!["cat", "cats"]);
    }

    #[test]
    fn cache_size_from_host_is_clamped() {
        let mut typo = WasmTypo::new();
        typo.set_cache_size(60);
        assert_eq!(typo.handle.options().cache_size, typo_spell::speller::MAX_CACHE_SIZE);
    }

    #[test]
    fn detailed_suggestions_convert_in_order() {
        let typo = WasmTypo {
            handle: TypoHandle::load(AFF, "cat/AB\n", None).unwrap(),
        };
        let suggestions = typo.handle.suggest_detailed("cta", 5).unwrap();
        let dtos = to_js_suggestions(suggestions);
        let words: Vec<&str> = dtos.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "cats"]);
        assert_eq!(dtos[0].distance, 2);
    }
}
