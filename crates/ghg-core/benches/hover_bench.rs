use ghg_core::config::{AreaChartConfig, LineChartConfig, PipelineConfig};
use ghg_core::{load, AreaChart, AreaInteraction, InlineSource, LineChart, LineInteraction, Pointer};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn gen_csv() -> String {
    let cfg = PipelineConfig::default();
    let mut text = String::from("REF_AREA,Reference area,MEASURE,UNIT_MEASURE,TIME_PERIOD,OBS_VALUE\n");
    for (e, code) in cfg.line_entities.iter().enumerate() {
        for year in cfg.start_year..=cfg.end_year {
            let v = 8.0 + e as f64 + (year as f64 * 0.3).cos();
            text.push_str(&format!("{code},Entity {code},_T,KG_CO2E_PS,{year},{v:.3}\n"));
        }
    }
    text
}

/// One pointer sweep across the plot, as a stream of move events.
fn sweep(left: f64, top: f64, width: f64, height: f64) -> Vec<Pointer> {
    (0..200)
        .map(|i| {
            let f = i as f64 / 199.0;
            Pointer::new(left + f * width, top + (1.0 - f) * height)
        })
        .collect()
}

fn bench_hover(c: &mut Criterion) {
    let cfg = PipelineConfig::default();
    let loaded = load(&InlineSource::new("bench.csv", gen_csv()), &cfg).expect("load");
    let line = LineChart::new(loaded.series.ready().expect("series"), &LineChartConfig::default()).expect("line chart");
    let area = AreaChart::new(loaded.records.ready().expect("records"), &cfg.area_entities, &AreaChartConfig::default())
        .expect("area chart");

    let mut group = c.benchmark_group("pointer_move");
    let moves = sweep(line.plot.left, line.plot.top, line.plot.width, line.plot.height);
    group.bench_function("line_sweep", |b| {
        let mut state = LineInteraction::new(&line);
        b.iter(|| {
            for &p in &moves {
                black_box(state.pointer_move(&line, p).map(|h| h.closest.len()));
            }
        });
    });
    let moves = sweep(area.plot.left, area.plot.top, area.plot.width, area.plot.height);
    group.bench_function("area_sweep", |b| {
        let mut state = AreaInteraction::new();
        b.iter(|| {
            for &p in &moves {
                black_box(state.pointer_move(&area, p).map(|l| l.key.len()));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hover);
criterion_main!(benches);
