use tracing_subscriber::EnvFilter;

use intvector::IntVector;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();
    let mut iv = IntVector::new(10)?;
    for _ in 0..20 {
        iv.append(rng.gen_range(0..10))?;
    }
    println!("{iv}");

    iv.replace_contents(&[1, 2, 3, 4, 5, 10])?;
    println!("{iv}");

    let median = iv.median()?;
    let mode = iv.mode(true)?;
    let range = iv.range();
    println!("Median: {median:.6}\nMode: {}\nRange: {range}", mode.value);
    println!("{iv}");

    iv.destroy()?;
    Ok(())
}
