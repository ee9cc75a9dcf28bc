#![no_main]

use cukex::diagnostics::format_error;
use cukex::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    match lexer::lex(source) {
        Ok(tokens) => {
            if let Err(err) = parser::parse_tokens(&tokens) {
                assert!(!err.is_internal(), "{source:?}: {err}");
                let _ = format_error("fuzz", source, &err);
            }
        }
        Err(err) => {
            let _ = format_error("fuzz", source, &err);
        }
    }
});
