//! Writes a synthetic monthly fuel price / IPCA dataset in the dashboard's
//! column layout. Months from November 2025 on are the "projection" tail.
//!
//! Usage: `generate_sample [OUTPUT]` (default `data/data.csv`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

const FIRST_YEAR: i32 = 2020;
const LAST_YEAR: i32 = 2026;

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/data.csv"));
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut rng = SimpleRng::new(42);
    let mut wtr = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    wtr.write_record([
        "DATA",
        "ANO",
        "MES",
        "Gasolina_Preco",
        "IPCA_Mensal",
        "IPCA_Acumulado",
        "LAG_0",
    ])?;

    let mut price: f64 = 4.30;
    let mut accumulated_factor = 1.0;
    let mut previous_price: Option<f64> = None;
    let mut rows = 0usize;

    for year in FIRST_YEAR..=LAST_YEAR {
        for month in 1..=12u32 {
            let date = NaiveDate::from_ymd_opt(year, month, 1)
                .with_context(|| format!("invalid month {year}-{month}"))?;

            let ipca = rng.gauss(0.40, 0.30);
            accumulated_factor *= 1.0 + ipca / 100.0;
            price = (price * (1.0 + rng.gauss(0.006, 0.02))).max(3.0);
            let lag0 = previous_price.map(|p| price / p - 1.0);
            previous_price = Some(price);

            wtr.write_record([
                date.format("%Y-%m-%d").to_string(),
                date.year().to_string(),
                month.to_string(),
                format!("{price:.2}"),
                format!("{ipca:.2}"),
                format!("{:.2}", (accumulated_factor - 1.0) * 100.0),
                lag0.map(|v| format!("{v:.4}")).unwrap_or_default(),
            ])?;
            rows += 1;
        }
    }
    wtr.flush()?;

    println!("Wrote {rows} monthly rows to {}", output_path.display());
    Ok(())
}
