#![no_main]

use libfuzzer_sys::fuzz_target;

// Der Projekt-Reader darf auf beliebigen Eingaben nie panicken —
// ungültige Dokumente enden als Fehler, nie als Absturz.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(document) = cabinet_bim_editor::parse_project_json(text) {
            let _ = cabinet_bim_editor::project_from_document(document);
        }
    }
});
