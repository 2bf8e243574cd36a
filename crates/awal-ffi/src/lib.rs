// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// awal-ffi: C-compatible FFI layer for the CorrectionEngine.
//
// This crate exposes a stable C ABI for native hosts; the on-device
// input-method service loads the engine through this layer (via JNI on
// Android).
//
// Memory management rules:
// - Opaque `CorrectionEngine` pointer: created by `awal_new`, freed by
//   `awal_free`. The engine is not thread-safe; the host must confine each
//   pointer to one thread.
// - Returned strings: caller must free with `awal_free_str`.
// - Returned string arrays: NULL-terminated; caller must free with
//   `awal_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - Language arguments are language codes ("fr", "ar", "en", "shi",
//   "shi-latn"); unknown codes resolve to the default language.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use awal_core::Language;
use awal_engine::CorrectionEngine;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new engine.
///
/// `dict_dir` is the directory holding the per-language dictionary files,
/// or NULL to run on the built-in fallback vocabularies. Never returns
/// NULL: a missing or unreadable directory degrades to the fallback lists.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_new(dict_dir: *const c_char) -> *mut CorrectionEngine {
    let dir = cstr_to_str(dict_dir).map(std::path::PathBuf::from);
    Box::into_raw(Box::new(CorrectionEngine::new(dir)))
}

/// Free an engine created by `awal_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_free(engine: *mut CorrectionEngine) {
    if !engine.is_null() {
        drop(unsafe { Box::from_raw(engine) });
    }
}

// ── Language control ─────────────────────────────────────────────

/// Switch the active language and pre-warm its dictionary.
/// Returns 0 on success, -1 on a NULL or invalid argument.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_set_language(
    engine: *mut CorrectionEngine,
    code: *const c_char,
) -> c_int {
    let Some(engine) = (unsafe { engine.as_mut() }) else {
        return -1;
    };
    let Some(code) = cstr_to_str(code) else {
        return -1;
    };
    engine.set_language(Language::from_code(code));
    0
}

// ── Correction API ───────────────────────────────────────────────

/// Whether the word is in the language's dictionary.
/// Returns 1 for known, 0 for unknown, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_is_known(
    engine: *const CorrectionEngine,
    word: *const c_char,
    language: *const c_char,
) -> c_int {
    let Some(engine) = (unsafe { engine.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    let Some(code) = cstr_to_str(language) else {
        return -1;
    };
    if engine.is_known(word, Language::from_code(code)) {
        1
    } else {
        0
    }
}

/// Ranked correction suggestions.
///
/// Returns a NULL-terminated array of C strings (at most `max_results`
/// entries). Caller must free with `awal_free_str_array`. Returns NULL on
/// error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_suggest(
    engine: *const CorrectionEngine,
    input: *const c_char,
    language: *const c_char,
    max_results: usize,
) -> *mut *mut c_char {
    let Some(engine) = (unsafe { engine.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(input) = cstr_to_str(input) else {
        return ptr::null_mut();
    };
    let Some(code) = cstr_to_str(language) else {
        return ptr::null_mut();
    };
    let suggestions = engine.suggestions(input, Language::from_code(code), max_results);
    strings_to_c_array(&suggestions)
}

/// The silent auto-correct replacement for the typed word.
///
/// Returns a heap-allocated C string (free with `awal_free_str`) when a
/// candidate clears the auto-correct confidence bar, NULL otherwise.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_top_correction(
    engine: *const CorrectionEngine,
    input: *const c_char,
    language: *const c_char,
) -> *mut c_char {
    let Some(engine) = (unsafe { engine.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(input) = cstr_to_str(input) else {
        return ptr::null_mut();
    };
    let Some(code) = cstr_to_str(language) else {
        return ptr::null_mut();
    };
    match engine.top_correction(input, Language::from_code(code)) {
        Some(word) => str_to_c(&word),
        None => ptr::null_mut(),
    }
}

// ── Memory management ────────────────────────────────────────────

/// Free a string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a NULL-terminated string array returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn awal_free_str_array(array: *mut *mut c_char) {
    if array.is_null() {
        return;
    }
    unsafe {
        let mut cursor = array;
        while !(*cursor).is_null() {
            drop(CString::from_raw(*cursor));
            cursor = cursor.add(1);
        }
        // Reconstruct the boxed slice to release the array itself. The
        // length is the entry count plus the NULL terminator.
        let len = cursor.offset_from(array) as usize + 1;
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(array, len)));
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    // Interior NULs cannot occur in dictionary words; fall back to an
    // empty string rather than panicking across the FFI boundary.
    CString::new(s)
        .unwrap_or_default()
        .into_raw()
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut out: Vec<*mut c_char> = Vec::with_capacity(strings.len() + 1);
    for s in strings {
        out.push(str_to_c(s));
    }
    out.push(ptr::null_mut());
    Box::into_raw(out.into_boxed_slice()) as *mut *mut c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    #[test]
    fn engine_round_trip_through_the_c_abi() {
        unsafe {
            let engine = awal_new(ptr::null());
            assert!(!engine.is_null());

            let code = c("fr");
            assert_eq!(awal_set_language(engine, code.as_ptr()), 0);

            let word = c("bonjour");
            assert_eq!(awal_is_known(engine, word.as_ptr(), code.as_ptr()), 1);

            let input = c("bonjou");
            let suggestions = awal_suggest(engine, input.as_ptr(), code.as_ptr(), 5);
            assert!(!suggestions.is_null());
            let first = *suggestions;
            assert!(!first.is_null());
            assert_eq!(CStr::from_ptr(first).to_str().unwrap(), "bonjour");
            awal_free_str_array(suggestions);

            let correction = awal_top_correction(engine, input.as_ptr(), code.as_ptr());
            assert!(!correction.is_null());
            assert_eq!(CStr::from_ptr(correction).to_str().unwrap(), "bonjour");
            awal_free_str(correction);

            awal_free(engine);
        }
    }

    #[test]
    fn null_arguments_are_rejected_not_crashed() {
        unsafe {
            assert_eq!(awal_set_language(ptr::null_mut(), ptr::null()), -1);
            assert_eq!(awal_is_known(ptr::null(), ptr::null(), ptr::null()), -1);
            assert!(awal_suggest(ptr::null(), ptr::null(), ptr::null(), 5).is_null());
            assert!(awal_top_correction(ptr::null(), ptr::null(), ptr::null()).is_null());
            awal_free_str(ptr::null_mut());
            awal_free_str_array(ptr::null_mut());
            awal_free(ptr::null_mut());
        }
    }
}
