use num_bigint::BigUint;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Stats {
    pub program: &'static str,
    pub n: i64,
    pub bits: u64,
    pub digits: usize,
    pub compute_secs: f32,
    pub format_secs: f32,
}

impl Stats {
    /// `rendered` is the decimal form of `value`, already produced by the caller.
    pub fn new(
        n: i64,
        value: &BigUint,
        rendered: &str,
        compute_secs: f32,
        format_secs: f32,
    ) -> Self {
        Self {
            program: "fib-bigint",
            n,
            bits: value.bits(),
            digits: rendered.len(),
            compute_secs,
            format_secs,
        }
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
