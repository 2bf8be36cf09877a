// tests/trigger_property.rs

use std::time::Duration;

use proptest::prelude::*;

use coalescer::trigger::{Trigger, TriggerOptions, Window};
use coalescer_test_utils::RecordingProcessor;

/// Outcome of replaying one signal schedule against a fresh trigger.
struct Replay {
    signals: usize,
    runs: usize,
    overlapped: bool,
}

fn window(ms: Option<u64>) -> Window {
    match ms {
        Some(ms) => Window::new(Duration::from_millis(ms)),
        None => Window::DISABLED,
    }
}

fn replay(gaps_ms: &[u64], pre_ms: Option<u64>, quiet_ms: Option<u64>, work_ms: u64) -> Replay {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .unwrap();

    rt.block_on(async {
        let processor = RecordingProcessor::new().with_work(Duration::from_millis(work_ms));
        let options = TriggerOptions {
            pre_run_delay: window(pre_ms),
            quiet_period: window(quiet_ms),
        };
        let trigger = Trigger::new(options, processor.clone());

        for &gap in gaps_ms {
            if gap > 0 {
                tokio::time::sleep(Duration::from_millis(gap)).await;
            }
            trigger.signal().unwrap();
        }

        // Long enough for any pending cycle (delay + work + quiet + re-fire).
        tokio::time::sleep(Duration::from_secs(30)).await;

        Replay {
            signals: gaps_ms.len(),
            runs: processor.count(),
            overlapped: processor.overlapped(),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn runs_never_overlap_and_never_outnumber_signals(
        gaps in proptest::collection::vec(0u64..3000, 1..30),
        pre in proptest::option::of(0u64..3000),
        quiet in proptest::option::of(0u64..3000),
        work in 0u64..1500,
    ) {
        let result = replay(&gaps, pre, quiet, work);

        prop_assert!(!result.overlapped, "processor calls overlapped");
        prop_assert!(result.runs >= 1, "signals sent but processor never ran");
        prop_assert!(
            result.runs <= result.signals,
            "{} runs for {} signals", result.runs, result.signals
        );
    }

    #[test]
    fn one_burst_inside_pre_run_delay_runs_once(
        burst in 1usize..40,
        delay_ms in 1u64..5000,
    ) {
        // Every signal lands before the delay expires, and nothing follows.
        let gaps = vec![0u64; burst];
        let result = replay(&gaps, Some(delay_ms), None, 0);
        prop_assert_eq!(result.runs, 1);
    }
}
