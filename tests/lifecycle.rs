//! Init/shutdown window sequencing. Kept as a single test so nothing in
//! this binary races the process-wide active flag.

use tafast::{cdl_lookback, initialize, shutdown, sma, CandlePattern, TaError};

#[test]
fn test_engine_window_gates_every_entry_point() {
    let closes: Vec<f64> = (0..32).map(|i| 100.0 + i as f64).collect();

    // Before the first initialize() everything is rejected.
    let err = sma(&closes, 5).expect_err("engine should be down");
    assert!(matches!(err, TaError::NotInitialized { .. }));
    assert!(cdl_lookback(CandlePattern::CdlDoji).is_err());

    initialize();
    assert!(sma(&closes, 5).is_ok());
    assert_eq!(
        cdl_lookback(CandlePattern::CdlDoji).expect("lookback after init"),
        10
    );

    // Idempotent.
    initialize();
    assert!(sma(&closes, 5).is_ok());

    shutdown();
    let err = sma(&closes, 5).expect_err("engine should be down again");
    assert!(matches!(err, TaError::NotInitialized { .. }));

    // A later initialize() reopens the window.
    initialize();
    assert!(sma(&closes, 5).is_ok());
}
