use intvector::builder::Builder;
use intvector::{Error, IntVectorBuilder, Restriction};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A frozen vector keeps its capacity and drops what does not fit.
    let mut builder = IntVectorBuilder::new().capacity(4).frozen(true);
    builder.extend([1, 2])?;
    let mut iv = builder.build()?;
    iv.append_slice(&[3, 4, 5, 6])?;
    assert_eq!(iv.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(iv.capacity(), 4);

    // Readonly rejects edits but still answers queries, and sorts a copy for the mode.
    iv.set_readonly();
    assert_eq!(iv.append(7), Err(Error::Mutability(Restriction::Readonly)));
    assert_eq!(iv.sum(), 10);
    assert_eq!(iv.mode(true)?.value, 1);

    // Immutable also refuses destruction and hands the vector back.
    iv.set_writable();
    iv.set_immutable();
    let err = iv.destroy().unwrap_err();
    assert_eq!(err.error(), &Error::Mutability(Restriction::Immutable));
    let mut iv = err.into_inner();
    iv.set_mutable();
    iv.destroy()?;
    Ok(())
}
