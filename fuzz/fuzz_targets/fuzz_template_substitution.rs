#![no_main]

use libfuzzer_sys::fuzz_target;

use extgen::application::replace_identifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let out = replace_identifier(
            content,
            "ShareExtensionViewController",
            "AppShareExtensionViewController",
        );
        if !content.contains("ShareExtensionViewController") {
            assert_eq!(out, content);
        }
    }
});
