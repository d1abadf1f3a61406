use std::hint::black_box;

use bx_http::envelope;
use bx_types::MarketSummary;
use bx_types::Trade;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

fn summaries_body(count: usize) -> String {
    let summary = r#"{"MarketName":"BTC-LTC","High":0.0135,"Low":0.012,"Volume":3833.97619253,"Last":0.01349998,"BaseVolume":47.03987026,"TimeStamp":"2014-07-09T07:22:16.72","Bid":0.01271001,"Ask":0.012911,"OpenBuyOrders":45,"OpenSellOrders":45,"PrevDay":0.01229501,"Created":"2014-02-13T00:00:00"}"#;
    let records = vec![summary; count].join(",");
    format!(r#"{{"success":true,"message":"","result":[{records}]}}"#)
}

fn history_body(count: usize) -> String {
    let trade = r#"{"Id":4861485,"TimeStamp":"2017-04-18T07:37:41.3","Quantity":12.46788437,"Price":0.0163001,"Total":0.20322776,"FillType":"FILL","OrderType":"BUY"}"#;
    let records = vec![trade; count].join(",");
    format!(r#"{{"success":true,"message":"","result":[{records}]}}"#)
}

fn bench_envelope_only(c: &mut Criterion) {
    let body = summaries_body(300);

    c.bench_function("envelope_decode_300_summaries", |b| {
        b.iter(|| {
            let payload = envelope::decode(black_box(body.as_bytes())).unwrap();
            black_box(payload.len())
        })
    });
}

fn bench_market_summaries(c: &mut Criterion) {
    let body = summaries_body(300);

    c.bench_function("decode_300_market_summaries", |b| {
        b.iter(|| {
            let payload = envelope::decode(black_box(body.as_bytes())).unwrap();
            let summaries: Vec<MarketSummary> = envelope::decode_result("getmarketsummaries", payload).unwrap();
            black_box(summaries)
        })
    });
}

fn bench_market_history(c: &mut Criterion) {
    let body = history_body(200);

    c.bench_function("decode_200_trades", |b| {
        b.iter(|| {
            let payload = envelope::decode(black_box(body.as_bytes())).unwrap();
            let trades: Vec<Trade> = envelope::decode_result("getmarkethistory", payload).unwrap();
            black_box(trades)
        })
    });
}

criterion_group!(benches, bench_envelope_only, bench_market_summaries, bench_market_history);
criterion_main!(benches);
