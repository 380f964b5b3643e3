#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

//! Measures probe lengths of `ProbingHashMap` as it fills and charts them.
//!
//! Usage: `probe_profile [OUTPUT_DIR]`. Writes `successful_probes.png` and
//! `unsuccessful_probes.png` into `OUTPUT_DIR` (default `.`).

use std::{
    env,
    error::Error,
    path::{Path, PathBuf},
};

use log::info;
use plotters::prelude::*;
use probing_map::{ProbingHashMap, logger::initialize_logger};
use rand::Rng;

// Maps are filled with 2^4 to 2^12 keys
const MIN_SIZE_LOG2: u32 = 4;
const MAX_SIZE_LOG2: u32 = 12;
// Absent keys looked up per map size
const MISS_SAMPLES: usize = 32;

#[derive(Debug, Clone, Copy)]
struct Sample {
    keys: usize,
    capacity: usize,
    average_hit: f64,
    worst_hit: usize,
    average_miss: f64,
}

struct Series {
    name: &'static str,
    color: RGBColor,
    points: Vec<f64>,
}

fn measure(rng: &mut impl Rng, n_keys: usize) -> Sample {
    let mut map = ProbingHashMap::with_capacity(0);
    let mut keys = Vec::with_capacity(n_keys);

    while keys.len() < n_keys {
        let key: u64 = rng.random();
        if map.insert(key, keys.len()).is_none() {
            keys.push(key);
        }
    }

    let hits: Vec<usize> = keys.iter().map(|key| map.probe_length(key)).collect();
    let misses: Vec<usize> = (0..MISS_SAMPLES)
        .map(|_| rng.random::<u64>())
        .filter(|key| !map.contains_key(key))
        .map(|key| map.probe_length(&key))
        .collect();

    Sample {
        keys: n_keys,
        capacity: map.capacity(),
        average_hit: hits.iter().sum::<usize>() as f64 / hits.len().max(1) as f64,
        worst_hit: hits.iter().copied().max().unwrap_or(0),
        average_miss: misses.iter().sum::<usize>() as f64 / misses.len().max(1) as f64,
    }
}

fn draw_chart(
    path: &Path,
    caption: &str,
    y_desc: &str,
    x_labels: &[String],
    series: &[Series],
) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let last = x_labels.len().saturating_sub(1);
    let max_y = series.iter().flat_map(|s| s.points.iter()).fold(1.0_f64, |max, &y| max.max(y)) * 1.1;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_labels(x_labels.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for s in series {
        let line_style = ShapeStyle::from(&s.color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(s.points.iter().copied().enumerate(), line_style))?
            .label(s.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        chart.draw_series(
            s.points.iter().enumerate().map(|(i, &y)| Circle::new((i, y), 4, s.color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logger();

    let output_dir = env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    let mut rng = rand::rng();

    let samples: Vec<Sample> =
        (MIN_SIZE_LOG2..=MAX_SIZE_LOG2).map(|exp| measure(&mut rng, 1_usize << exp)).collect();

    for sample in &samples {
        println!(
            "{:>5} keys in {:>5} slots: avg hit = {:.2}, worst hit = {}, avg miss = {:.0}",
            sample.keys, sample.capacity, sample.average_hit, sample.worst_hit, sample.average_miss
        );
    }

    let x_labels: Vec<String> = samples.iter().map(|s| s.keys.to_string()).collect();

    draw_chart(
        &output_dir.join("successful_probes.png"),
        "Probe Length of Successful Lookups",
        "Probes",
        &x_labels,
        &[
            Series {
                name: "Average",
                color: RGBColor(50, 90, 220),
                points: samples.iter().map(|s| s.average_hit).collect(),
            },
            Series {
                name: "Worst case",
                color: RGBColor(220, 50, 50),
                points: samples.iter().map(|s| s.worst_hit as f64).collect(),
            },
        ],
    )?;

    draw_chart(
        &output_dir.join("unsuccessful_probes.png"),
        "Probe Length of Unsuccessful Lookups",
        "Probes",
        &x_labels,
        &[
            Series {
                name: "Average miss",
                color: RGBColor(180, 50, 180),
                points: samples.iter().map(|s| s.average_miss).collect(),
            },
            Series {
                name: "Capacity",
                color: RGBColor(50, 180, 50),
                points: samples.iter().map(|s| s.capacity as f64).collect(),
            },
        ],
    )?;

    Ok(())
}
