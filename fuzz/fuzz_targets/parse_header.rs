#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any header either generates or reports an error; neither may panic
        if let Ok(generated) = kindgen::generate(s, "fuzz.h") {
            let table = &generated.table;
            for (k, record) in table.iter().enumerate() {
                assert_eq!(record.code, table.start() + k as i32);
            }
        }
    }
});
