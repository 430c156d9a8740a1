use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use icao_ats::{FieldId, FieldText, Parser};

const TAGGED: &str = "FF EGZZFPLX LFPYZQZX\n121200 EGLLZPZX\n\
-F3 FPL\n\
-F7 BAW123\n\
-F8 IS\n\
-F9 A320/M\n\
-F10 SDFGIRWY/S\n\
-F13 EGLL1000\n\
-F15 N0450F330 DCT DVR UL9 KONAN UL607 SPI/N0440F350 UZ113 NVO UN852 PIGOS\n\
-F16 LFPG0100 LFPO\n\
-F18 PBN/B1D1 DOF/260101 REG/GEUUA RMK/TCAS\n\
-F19 E/0200 P/TBN R/VE S/M J/L D/2 8 C YELLOW A/WHITE";

const POSITIONAL: &str = "FF EGZZFPLX LFPYZQZX\n121200 EGLLZPZX\n\
(FPL-BAW123-IS\n\
-A320/M-SDFGIRWY/S\n\
-EGLL1000\n\
-N0450F330 DCT DVR UL9 KONAN UL607 SPI/N0440F350 UZ113 NVO UN852 PIGOS\n\
-LFPG0100 LFPO\n\
-PBN/B1D1 DOF/260101 REG/GEUUA RMK/TCAS\n\
-E/0200 P/TBN R/VE S/M J/L D/2 8 C YELLOW A/WHITE)\n\
NNNN";

const ROUTE: &str = "N0450F330 DCT DVR UL9 KONAN UL607 SPI/N0440F350 UZ113 NVO UN852 PIGOS";

/// Benchmark parsing a complete flight plan
fn bench_messages(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("FPL");

    group.throughput(Throughput::Bytes(TAGGED.len() as u64));
    group.bench_function("tagged", |b| b.iter(|| parser.parse(black_box(TAGGED))));

    group.throughput(Throughput::Bytes(POSITIONAL.len() as u64));
    group.bench_function("positional", |b| {
        b.iter(|| parser.parse(black_box(POSITIONAL)))
    });

    group.finish();
}

/// Benchmark the route which is the most complex field
fn bench_route(c: &mut Criterion) {
    let parse = FieldId::F15.parser().expect("route should have a parser");

    c.bench_function("route", |b| {
        b.iter(|| parse(FieldText::new(FieldId::F15, black_box(ROUTE), 0)))
    });
}

criterion_group!(benches, bench_messages, bench_route);
criterion_main!(benches);
