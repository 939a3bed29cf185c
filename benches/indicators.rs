use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tafast::utilities::data_loader::read_candles_from_csv;
use tafast::{
    adx, atr, bbands, cdlengulfing, ema, ht_trendline, initialize, macd, rsi, sar, sma, stoch,
    MaType,
};

fn benchmark_indicators(c: &mut Criterion) {
    initialize();
    let candles =
        read_candles_from_csv("src/data/ohlcv_4h_sample.csv").expect("failed to load candles");
    let close = &candles.close;
    let high = &candles.high;
    let low = &candles.low;
    let open = &candles.open;

    let mut group = c.benchmark_group("indicators");

    group.bench_function(BenchmarkId::new("SMA", 30), |b| {
        b.iter(|| sma(black_box(close), 30).expect("sma"))
    });
    group.bench_function(BenchmarkId::new("EMA", 30), |b| {
        b.iter(|| ema(black_box(close), 30).expect("ema"))
    });
    group.bench_function(BenchmarkId::new("RSI", 14), |b| {
        b.iter(|| rsi(black_box(close), 14).expect("rsi"))
    });
    group.bench_function(BenchmarkId::new("MACD", 0), |b| {
        b.iter(|| macd(black_box(close), 12, 26, 9).expect("macd"))
    });
    group.bench_function(BenchmarkId::new("BBANDS", 20), |b| {
        b.iter(|| bbands(black_box(close), 20, 2.0, 2.0, MaType::Sma).expect("bbands"))
    });
    group.bench_function(BenchmarkId::new("ATR", 14), |b| {
        b.iter(|| atr(black_box(high), black_box(low), black_box(close), 14).expect("atr"))
    });
    group.bench_function(BenchmarkId::new("ADX", 14), |b| {
        b.iter(|| adx(black_box(high), black_box(low), black_box(close), 14).expect("adx"))
    });
    group.bench_function(BenchmarkId::new("STOCH", 0), |b| {
        b.iter(|| {
            stoch(
                black_box(high),
                black_box(low),
                black_box(close),
                5,
                3,
                MaType::Sma,
                3,
                MaType::Sma,
            )
            .expect("stoch")
        })
    });
    group.bench_function(BenchmarkId::new("SAR", 0), |b| {
        b.iter(|| sar(black_box(high), black_box(low), 0.02, 0.2).expect("sar"))
    });
    group.bench_function(BenchmarkId::new("HT_TRENDLINE", 0), |b| {
        b.iter(|| ht_trendline(black_box(close)).expect("ht_trendline"))
    });
    group.bench_function(BenchmarkId::new("CDLENGULFING", 0), |b| {
        b.iter(|| {
            cdlengulfing(
                black_box(open),
                black_box(high),
                black_box(low),
                black_box(close),
            )
            .expect("cdlengulfing")
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_indicators);
criterion_main!(benches);
