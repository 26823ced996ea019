use chordsheet::ChordsheetError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ChordsheetError> {
    Ok(serde_json::to_string(value)?)
}

fn error_to_js(e: ChordsheetError) -> JsValue {
    let body = BindingError { message: e.to_string() };
    JsValue::from_str(&serde_json::to_string(&body).unwrap_or_else(|_| e.to_string()))
}

/// Transpose one chord annotation by `steps` semitones
#[wasm_bindgen(js_name = transposeChordToken)]
pub fn transpose_chord_token(token: &str, steps: i32) -> String {
    chordsheet::transpose_chord_token(token, steps)
}

/// Transpose every `[chord]` in a document by `steps` semitones
#[wasm_bindgen(js_name = transposeChordPro)]
pub fn transpose_chordpro(text: &str, steps: i32) -> String {
    chordsheet::transpose_chordpro(text, steps)
}

/// Drop directive and comment lines, keeping lyrics and blank lines
#[wasm_bindgen(js_name = stripChordProDirectives)]
pub fn strip_chordpro_directives(text: &str) -> String {
    chordsheet::strip_chordpro_directives(text)
}

/// Directives as a JSON object, in first-seen key order
#[wasm_bindgen(js_name = extractMeta)]
pub fn extract_meta(text: &str) -> Result<String, JsValue> {
    to_json(&chordsheet::extract_meta(text)).map_err(error_to_js)
}

/// Lines as a JSON array of strings
#[wasm_bindgen(js_name = splitLines)]
pub fn split_lines(text: &str) -> Result<String, JsValue> {
    to_json(&chordsheet::split_lines(text)).map_err(error_to_js)
}

/// Displayable lines as a JSON array of strings
#[wasm_bindgen(js_name = toDisplayLines)]
pub fn to_display_lines(text: &str) -> Result<String, JsValue> {
    to_json(&chordsheet::to_display_lines(text)).map_err(error_to_js)
}

/// Chord/lyric segments of one line as a JSON array
#[wasm_bindgen(js_name = lineSegments)]
pub fn line_segments(line: &str) -> Result<String, JsValue> {
    to_json(&chordsheet::line_segments(line)).map_err(error_to_js)
}

/// Metadata, transposed key, and display lines with segments, as JSON
#[wasm_bindgen(js_name = prepareSong)]
pub fn prepare_song(text: &str, steps: i32) -> Result<String, JsValue> {
    to_json(&chordsheet::prepare_song(text, steps)).map_err(error_to_js)
}

/// Semitones from one key to another (0-11), or `undefined` if either is unknown
#[wasm_bindgen(js_name = stepsBetween)]
pub fn steps_between(from: &str, to: &str) -> Option<i32> {
    chordsheet::steps_between(from, to)
}
