use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mingpan_base::{
    ALL_STEMS, DayunDirection, GanZhi, HeavenlyStem, all_ten_gods, bureau_for, current_cycle,
    dayun_cycles, ganzhi_to_index, index_to_ganzhi, ten_god, ziwei_layout,
};

fn codec_bench(c: &mut Criterion) {
    let gz = index_to_ganzhi(37);

    let mut group = c.benchmark_group("ganzhi");
    group.bench_function("index_to_ganzhi", |b| {
        b.iter(|| index_to_ganzhi(black_box(37)))
    });
    group.bench_function("ganzhi_to_index", |b| {
        b.iter(|| ganzhi_to_index(black_box(gz.stem()), black_box(gz.branch())))
    });
    group.bench_function("parse", |b| b.iter(|| GanZhi::parse(black_box("辛丑"))));
    group.finish();
}

fn ten_gods_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ten_gods");
    group.bench_function("ten_god_matrix", |b| {
        b.iter(|| {
            for day in ALL_STEMS {
                for target in ALL_STEMS {
                    black_box(ten_god(day, target));
                }
            }
        })
    });
    group.bench_function("all_ten_gods", |b| {
        b.iter(|| all_ten_gods(black_box(HeavenlyStem::Ji)))
    });
    group.finish();
}

fn dayun_bench(c: &mut Criterion) {
    let month = index_to_ganzhi(0);
    let qiyun = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    let query = NaiveDate::from_ymd_opt(2045, 6, 1).unwrap_or_default();

    let mut group = c.benchmark_group("dayun");
    group.bench_function("dayun_cycles_10", |b| {
        b.iter(|| dayun_cycles(black_box(month), qiyun, DayunDirection::Forward, 10))
    });
    if let Ok(cycles) = dayun_cycles(month, qiyun, DayunDirection::Forward, 10) {
        group.bench_function("current_cycle", |b| {
            b.iter(|| current_cycle(black_box(&cycles), black_box(query)))
        });
    }
    group.finish();
}

fn ziwei_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ziwei");
    group.bench_function("bureau_for", |b| {
        b.iter(|| bureau_for(black_box(index_to_ganzhi(2))))
    });
    group.bench_function("ziwei_layout", |b| {
        b.iter(|| ziwei_layout(black_box(HeavenlyStem::Geng), 7, 15, 6))
    });
    group.finish();
}

criterion_group!(benches, codec_bench, ten_gods_bench, dayun_bench, ziwei_bench);
criterion_main!(benches);
