use serde::Serialize;

/// Launch sites with a rough share of all flights.
const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.45),
    ("KSC LC-39A", 0.23),
    ("VAFB SLC-4E", 0.19),
    ("CCAFS SLC-40", 0.13),
];

/// Booster version eras: category name, last flight number of the era,
/// payload range (kg) and success probability.
const CATEGORIES: [(&str, u32, (f64, f64), f64); 5] = [
    ("v1.0", 5, (0.0, 700.0), 0.40),
    ("v1.1", 20, (500.0, 4700.0), 0.55),
    ("FT", 42, (1500.0, 9600.0), 0.78),
    ("B4", 50, (2200.0, 9600.0), 0.85),
    ("B5", 56, (2500.0, 6500.0), 0.92),
];

const FLIGHTS: u32 = 56;
const OUTPUT: &str = "launch_records.csv";

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

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

    /// Uniform sample from [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Bernoulli draw with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Weighted site pick.
fn pick_site(rng: &mut SimpleRng) -> &'static str {
    let draw = rng.next_f64();
    let mut cumulative = 0.0;
    for (site, weight) in SITES {
        cumulative += weight;
        if draw < cumulative {
            return site;
        }
    }
    SITES[SITES.len() - 1].0
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut wtr = csv::Writer::from_path(OUTPUT).expect("Failed to create output file");

    let mut successes: u32 = 0;
    for flight in 1..=FLIGHTS {
        let (category, _, (lo, hi), p_success) = *CATEGORIES
            .iter()
            .find(|&&(_, last, _, _)| flight <= last)
            .expect("flight beyond the last booster era");

        let site = pick_site(&mut rng);
        // Payload masses come in multiples of 10 kg.
        let payload = (rng.uniform(lo, hi) / 10.0).round() * 10.0;
        let class = i64::from(rng.chance(p_success));
        successes += class as u32;

        let booster_version = if category == "v1.0" {
            format!("F9 v1.0 B000{flight}")
        } else {
            format!("F9 {category} B1{flight:03}")
        };

        wtr.serialize(SampleRow {
            flight_number: flight,
            launch_site: site.to_owned(),
            class,
            payload_kg: payload,
            booster_version,
            booster_category: category.to_owned(),
        })
        .expect("Failed to write record");
    }
    wtr.flush().expect("Failed to flush output");

    println!("Wrote {FLIGHTS} launch records ({successes} successes) to {OUTPUT}");
}
