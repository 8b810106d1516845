use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bump_semver::{compare, Semver, Version, VersionParser};

fn bench_parse(c: &mut Criterion) {
    let parser = VersionParser::for_tags();
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "v0.0.1-rc.1+sha.abc123",
        "10.20.30",
        "1.0.0-alpha.beta.gamma",
        "01.2.3",
        "1.2",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parser.parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-rc.1", "1.0.0-rc.1.1"),
    ]
    .iter()
    .map(|(a, b)| (Version::parse(a).expect("parse"), Version::parse(b).expect("parse")))
    .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (v1, v2) in &pairs {
                black_box(compare(black_box(v1), black_box(v2)));
            }
        })
    });
}

fn bench_parse_constraints(c: &mut Criterion) {
    let parser = VersionParser::new();
    let constraints = [
        ">=1.2.3, <2.0.0",
        "^1.2.3",
        "~2.4",
        "~1",
        "!=1.5.0, !=1.5.1",
        ">1.0, <3.0",
        "=>1.0",
    ];

    c.bench_function("parse_constraint_sets", |b| {
        b.iter(|| {
            for constraint in constraints {
                black_box(parser.parse_constraint_set(black_box(constraint)).ok());
            }
        })
    });
}

fn bench_check(c: &mut Criterion) {
    let set = VersionParser::new()
        .parse_constraint_set("^1.2, !=1.5.0")
        .expect("parse constraints");
    let versions: Vec<Version> = ["1.2.3", "1.2.3-beta", "2.4.5", "1.9999.9999", "1.5.0", "2.0.0"]
        .iter()
        .map(|v| Version::parse(v).expect("parse"))
        .collect();

    c.bench_function("constraint_set_check", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(set.check(black_box(version)));
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("v2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3, <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, constraint) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(constraint)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "v50.2.0",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)));
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_compare,
    bench_parse_constraints,
    bench_check,
    bench_satisfies,
    bench_sort
);
criterion_main!(benches);
