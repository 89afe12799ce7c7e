//! Benchmarks for ladder planning
//!
//! Measures ffprobe JSON parsing and sequential vs parallel planning over
//! growing input sets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hlsforge_probe::{parse_ffprobe_json, ProbeData, ProbeStream};
use hlsforge_suggest::VariantPlanner;

/// ffprobe output for a UHD HEVC file with one audio track
const FFPROBE_HEVC: &str = r#"{
    "streams": [
        {
            "index": 0,
            "codec_type": "video",
            "codec_name": "hevc",
            "width": 3840,
            "height": 2160,
            "display_aspect_ratio": "16:9",
            "bit_rate": "18000000"
        },
        {
            "index": 1,
            "codec_type": "audio",
            "codec_name": "eac3",
            "bit_rate": "640000"
        }
    ],
    "format": {
        "filename": "/media/movie.mkv",
        "format_name": "matroska,webm",
        "duration": "7200.000000",
        "size": "16200000000"
    }
}"#;

fn video(index: u32, codec: &str, width: u32, height: u32, dar: &str) -> ProbeStream {
    ProbeStream {
        index,
        codec_type: "video".to_string(),
        codec_name: codec.to_string(),
        width,
        height,
        display_aspect_ratio: dar.to_string(),
        bit_rate: "8000000".to_string(),
    }
}

/// A mix of sources covering every planning branch.
fn inputs(count: usize) -> Vec<ProbeData> {
    (0..count)
        .map(|i| match i % 4 {
            0 => ProbeData::from_streams(vec![video(0, "hevc", 3840, 2160, "16:9")]),
            1 => ProbeData::from_streams(vec![video(0, "h264", 1920, 1080, "16:9")]),
            2 => ProbeData::from_streams(vec![video(0, "vp9", 1440, 1080, "4:3")]),
            _ => ProbeData::from_streams(vec![video(0, "av1", 4096, 1716, "2.39")]),
        })
        .collect()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ffprobe_json");
    group.throughput(Throughput::Bytes(FFPROBE_HEVC.len() as u64));
    group.bench_function("hevc_uhd", |b| {
        b.iter(|| parse_ffprobe_json(black_box(FFPROBE_HEVC)))
    });
    group.finish();
}

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");
    let planner = VariantPlanner::default();

    for count in [1usize, 16, 256] {
        let data = inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("sequential", count), &data, |b, data| {
            b.iter(|| planner.plan(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &data, |b, data| {
            b.iter(|| planner.plan_parallel(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_planning);
criterion_main!(benches);
