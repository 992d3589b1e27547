#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The first NUL byte splits the input into OBJ and MTL streams
    let (obj, mtl) = match data.iter().position(|&b| b == 0) {
        Some(split) => (&data[..split], &data[split + 1..]),
        None => (data, &[][..]),
    };

    let _ = objmtl::Document::from_readers(obj, mtl);
});
