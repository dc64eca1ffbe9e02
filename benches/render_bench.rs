use criterion::{criterion_group, criterion_main, Criterion};

use lettermark::export::{encode_png, resample};
use lettermark::palette::BG_COLOR;
use lettermark::rendering::flatten;
use lettermark::{render_icon, Fonts};

fn bench_render_master(c: &mut Criterion) {
    let fonts = Fonts::builtin();
    c.bench_function("render_icon_1024", |b| {
        b.iter(|| render_icon(1024, &fonts).expect("render"))
    });
}

fn bench_export_favicon(c: &mut Criterion) {
    let master = render_icon(1024, &Fonts::builtin()).expect("render");
    c.bench_function("favicon_resample_encode", |b| {
        b.iter(|| {
            let small = resample(&master, Some(48)).expect("resample");
            encode_png(&flatten(&small, BG_COLOR)).expect("encode")
        })
    });
}

criterion_group!(benches, bench_render_master, bench_export_favicon);
criterion_main!(benches);
