#![no_main]

use ashen_ppm::ashen_core::bytestream::ByteCursor;
use ashen_ppm::ashen_core::options::DecoderOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // keep allocations small, the fuzzer controls the dimensions
    let options = DecoderOptions::default()
        .set_max_width(1 << 12)
        .set_max_height(1 << 12);

    let mut decoder = ashen_ppm::PPMDecoder::new_with_options(ByteCursor::new(data), options);
    let _ = decoder.decode();
});
