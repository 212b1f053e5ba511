use criterion::{black_box, Criterion};
use sliderpath::{
    approximate_bezier, approximate_catmull, approximate_circular_arc, calculate_length,
    SliderPath,
};
use crate::common::samples::CURVES;

pub fn bezier(c: &mut Criterion) {
    c.bench_function("bezier", |b| {
        b.iter(|| {
            for curve in CURVES.iter() {
                black_box(approximate_bezier(curve).unwrap());
            }
        })
    });
}

pub fn catmull(c: &mut Criterion) {
    c.bench_function("catmull", |b| {
        b.iter(|| {
            for curve in CURVES.iter() {
                black_box(approximate_catmull(curve).unwrap());
            }
        })
    });
}

pub fn circular_arc(c: &mut Criterion) {
    c.bench_function("circular_arc", |b| {
        b.iter(|| {
            for curve in CURVES.QUADRATIC.iter() {
                black_box(approximate_circular_arc(curve).unwrap());
            }
        })
    });
}

pub fn length(c: &mut Criterion) {
    let paths: Vec<_> = CURVES
        .iter()
        .map(|curve| (curve, approximate_bezier(curve).unwrap()))
        .collect();
    c.bench_function("length", |b| {
        b.iter(|| {
            for (curve, path) in paths.iter() {
                black_box(calculate_length(curve, path, &[path.len() - 1], 100.0).unwrap());
            }
        })
    });
}

pub fn slider(c: &mut Criterion) {
    let start = sliderpath::Vector2::new(256.0, 192.0);
    c.bench_function("slider", |b| {
        b.iter(|| {
            let mut slider = SliderPath::parse(
                "B|300:100|300:100|400:150|350:250|350:250|200:300",
                start,
                450.0,
            )
            .unwrap();
            black_box(slider.calculate().unwrap().path.len());
        })
    });
}

pub fn all(c: &mut Criterion) {
    bezier(c);
    catmull(c);
    circular_arc(c);
    length(c);
    slider(c);
}
