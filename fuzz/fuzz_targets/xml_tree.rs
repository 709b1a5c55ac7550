#![no_main]
use libfuzzer_sys::fuzz_target;
use xtree::{from_xml_bytes, transform, TreeConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = from_xml_bytes(data) {
        let _ = transform(&doc.root, &TreeConfig::new().with_root_slash(true));
    }
});
