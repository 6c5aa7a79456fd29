use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

/// Column layout of the published social media sentiment dataset.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Post {
    text: String,
    sentiment: String,
    platform: String,
    retweets: f64,
    likes: f64,
    country: String,
    year: i64,
    month: i64,
    day: String,
    hour: i64,
}

const SENTIMENTS: [&str; 6] = ["Positive", "Negative", "Neutral", "Joy", "Excitement", "Sadness"];
const PLATFORMS: [&str; 3] = ["Twitter", "Instagram", "Facebook"];
const COUNTRIES: [&str; 6] = ["USA", "Canada", "UK", "Australia", "India", "Germany"];
const DAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const WORDS: [&str; 8] = [
    "sunrise", "coffee", "deadline", "concert", "rain", "victory", "traffic", "garden",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 732;

    let posts: Vec<Post> = (0..n_rows)
        .map(|_| {
            let sentiment = rng.pick(&SENTIMENTS);
            // Positive posts travel further.
            let boost = if matches!(sentiment, "Positive" | "Joy" | "Excitement") {
                10.0
            } else {
                0.0
            };
            let retweets = (rng.next_f64() * 30.0 + boost).round();
            Post {
                text: format!("{} {}", rng.pick(&WORDS), rng.pick(&WORDS)),
                sentiment: sentiment.to_string(),
                platform: rng.pick(&PLATFORMS).to_string(),
                retweets,
                likes: (retweets * 2.0 + rng.next_f64() * 10.0).round(),
                country: rng.pick(&COUNTRIES).to_string(),
                year: 2015 + rng.below(9) as i64,
                month: 1 + rng.below(12) as i64,
                day: rng.pick(&DAYS).to_string(),
                hour: rng.below(24) as i64,
            }
        })
        .collect();

    // Write CSV
    let csv_path = "projectk.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV")?;
    for post in &posts {
        writer.serialize(post).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    // Write Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("Text", DataType::Utf8, false),
        Field::new("Sentiment", DataType::Utf8, false),
        Field::new("Platform", DataType::Utf8, false),
        Field::new("Retweets", DataType::Float64, false),
        Field::new("Likes", DataType::Float64, false),
        Field::new("Country", DataType::Utf8, false),
        Field::new("Year", DataType::Int64, false),
        Field::new("Month", DataType::Int64, false),
        Field::new("Day", DataType::Utf8, false),
        Field::new("Hour", DataType::Int64, false),
    ]));

    let strings =
        |f: fn(&Post) -> &str| StringArray::from(posts.iter().map(f).collect::<Vec<_>>());
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(strings(|p| p.text.as_str())),
            Arc::new(strings(|p| p.sentiment.as_str())),
            Arc::new(strings(|p| p.platform.as_str())),
            Arc::new(Float64Array::from_iter_values(posts.iter().map(|p| p.retweets))),
            Arc::new(Float64Array::from_iter_values(posts.iter().map(|p| p.likes))),
            Arc::new(strings(|p| p.country.as_str())),
            Arc::new(Int64Array::from_iter_values(posts.iter().map(|p| p.year))),
            Arc::new(Int64Array::from_iter_values(posts.iter().map(|p| p.month))),
            Arc::new(strings(|p| p.day.as_str())),
            Arc::new(Int64Array::from_iter_values(posts.iter().map(|p| p.hour))),
        ],
    )
    .context("building record batch")?;

    let parquet_path = "projectk.parquet";
    let file = std::fs::File::create(parquet_path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;

    println!("Wrote {n_rows} posts to {csv_path} and {parquet_path}");
    Ok(())
}
