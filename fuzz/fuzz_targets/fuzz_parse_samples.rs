#![no_main]

use libfuzzer_sys::fuzz_target;

use benchplot_core::samples::parse_samples;
use benchplot_core::ChunkAverager;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must either parse or fail cleanly
    if let Ok(samples) = parse_samples(data) {
        let averages = ChunkAverager::new(4).unwrap().average(&samples);
        assert_eq!(averages.len(), samples.len() / 4);
    }
});
