mod config;
mod stats;

use std::time::Instant;

use config::Config;
use fib_bigint::fibonacci;
use stats::Stats;
use tracing::info;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // setup
    let config = Config::from_env()?;
    let n = config.n;

    // compute
    let it = Instant::now();
    let value = fibonacci(n);
    let compute_secs = it.elapsed().as_secs_f32();

    // render
    let it = Instant::now();
    let rendered = value.to_string();
    let format_secs = it.elapsed().as_secs_f32();

    let stats = Stats::new(n, &value, &rendered, compute_secs, format_secs);
    info!(
        bits = stats.bits,
        digits = stats.digits,
        compute_secs,
        format_secs,
        "computed fib({n})"
    );

    if config.print_value {
        eprintln!("fib({n}) = {rendered}");
    }

    println!("{}", stats.to_json_line()?);
    Ok(())
}
