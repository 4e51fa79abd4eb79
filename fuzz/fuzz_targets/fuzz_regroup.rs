#![no_main]

use libfuzzer_sys::fuzz_target;

use benchplot_core::{ChunkAverage, ExecutionMode, ModeRegrouper, Regrouped};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let mode = ExecutionMode::ALL[usize::from(data[0]) % 3];
    let averages: Vec<ChunkAverage> = data[1..]
        .iter()
        .map(|&b| ChunkAverage {
            odd: f64::from(b),
            even: f64::from(b) / 2.0,
        })
        .collect();

    let regrouped = ModeRegrouper::new(mode).regroup(&averages);
    if let Regrouped::Parallel { checksym, .. } = &regrouped {
        assert!(checksym.len() <= 6);
        assert!(checksym.iter().all(|g| g.len() == 9));
    }
    let _ = regrouped.charts();
});
