#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

//! Fills a `ChainedHashMap` with random keys and charts how it behaves:
//! the load factor after every batch of insertions, and how long the
//! chains are once the table is full.

use chainmap::{ChainedHashMap, DEFAULT_LOAD_FACTOR_THRESHOLD, logger::initialize_logger};
use log::info;
use plotters::prelude::*;
use rand::Rng;

const KEYS: usize = 50_000;
const SAMPLE_EVERY: usize = 100;

const FONT_FAMILY: &str = "sans-serif";
const TITLE_SIZE: u32 = 35;
const TEXT_SIZE: u32 = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let mut rng = rand::rng();
    let mut table = ChainedHashMap::new();
    let mut load_curve: Vec<(usize, f64)> = Vec::with_capacity(KEYS / SAMPLE_EVERY + 1);

    for inserted in 1..=KEYS {
        let key: u64 = rng.random();
        table.insert(key, inserted);
        if inserted % SAMPLE_EVERY == 0 {
            load_curve.push((table.len(), table.load_factor()));
        }
    }

    let stats = table.chain_stats();
    info!(
        "{} entries in {} buckets, {} occupied, longest chain {}, mean chain {:.2}",
        stats.entries,
        stats.buckets,
        stats.occupied_buckets,
        stats.longest_chain,
        stats.mean_chain_length()
    );

    draw_load_factor(&load_curve)?;
    draw_chain_lengths(&table.chain_lengths())?;

    println!("Generated plot images: load_factor.png, chain_lengths.png");

    Ok(())
}

/// Load factor against entry count, with the growth threshold for reference
fn draw_load_factor(load_curve: &[(usize, f64)]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("load_factor.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_entries = load_curve.last().map_or(1, |&(entries, _)| entries);
    let threshold = DEFAULT_LOAD_FACTOR_THRESHOLD as f64 / 100.0;

    let mut chart = ChartBuilder::on(&root)
        .caption("Load Factor While Inserting", (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_entries, 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Entries")
        .y_desc("Load Factor")
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    let threshold_style = ShapeStyle::from(&RED.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            vec![(0, threshold), (max_entries, threshold)],
            threshold_style,
        ))?
        .label("Growth Threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    let line_style = ShapeStyle::from(&BLUE).stroke_width(2);
    chart
        .draw_series(LineSeries::new(load_curve.iter().copied(), line_style))?
        .label("Load Factor")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Histogram of buckets by chain length
fn draw_chain_lengths(lengths: &[usize]) -> Result<(), Box<dyn std::error::Error>> {
    let longest = lengths.iter().copied().max().unwrap_or(0);
    let mut buckets_by_length = vec![0usize; longest + 1];
    for &length in lengths {
        buckets_by_length[length] += 1;
    }
    let tallest = buckets_by_length.iter().copied().max().unwrap_or(0);

    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length Distribution", (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0..longest + 1).into_segmented(), 0..tallest + tallest / 10 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Chain Length")
        .y_desc("Buckets")
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.6).filled())
            .margin(4)
            .data(buckets_by_length.iter().enumerate().map(|(length, &count)| (length, count))),
    )?;

    root.present()?;
    Ok(())
}
