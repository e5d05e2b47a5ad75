use std::thread;

use super::*;

#[test]
fn quiet_spinner_is_hidden() {
    let progress = ScanProgress::new(true);
    assert!(progress.progress_bar.is_hidden());
    progress.inc();
    progress.finish();
}

#[test]
fn non_tty_spinner_is_hidden() {
    let progress = ScanProgress::new_with_visibility(false, false);
    assert!(progress.progress_bar.is_hidden());
}

#[test]
fn visible_spinner_counts() {
    let progress = ScanProgress::new_with_visibility(false, true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.count(), 2);
    progress.finish();
}

#[test]
fn clones_share_the_counter() {
    let progress = ScanProgress::hidden();
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.count(), 2);
    assert_eq!(cloned.count(), 2);
}

#[test]
fn concurrent_increments_are_not_lost() {
    let progress = ScanProgress::hidden();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let progress = progress.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    progress.inc();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(progress.count(), 400);
    progress.finish();
}
