#![no_main]

use libfuzzer_sys::fuzz_target;

use extgen::infrastructure::repositories::{parse_project, render_project};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(graph) = parse_project(content) {
            let _ = graph.dangling_references();
            let rendered = render_project(&graph).expect("a parsed graph renders");
            let reparsed = parse_project(&rendered).expect("rendered output parses");
            assert_eq!(graph, reparsed);
        }
    }
});
