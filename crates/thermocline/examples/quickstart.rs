//! Build a 1D and a 2D staggered grid, put fields on them, and print a
//! summary of each.
//!
//! Run with `cargo run --example quickstart`.

use std::sync::Arc;
use thermocline::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The worked example: four cells on [0, 1].
    let line = Arc::new(Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0)?);
    println!("{line}");
    println!("  xF = {:?}", line.x_faces());
    println!("  xC = {:?}", line.x_centres());

    let h = Field1D::from_fn(Centre, line.clone(), |x| 1.0 + x * (1.0 - x));
    println!("  h  = {:?}\n", h.data());

    // Topologies usually come from a configuration file.
    let tx: Topology = "periodic".parse()?;
    let ty: Topology = "bounded".parse()?;
    let x = AxisConfig::new(tx, 64, 0.0, 2.0e6).with_halo(2);
    let y = AxisConfig::new(ty, 32, -5.0e5, 5.0e5).with_halo(2);
    let channel = Arc::new(Grid2D::from_configs(&x, &y)?);
    println!("{channel}");

    let mut state = FieldRegistry::new(channel.clone());
    state.insert(
        "h",
        Field2D::from_fn(Centre, Centre, channel.clone(), |_, y| 100.0 + 2.0e-5 * y),
    )?;
    state.insert("u", Field2D::zeros(Face, Centre, channel.clone()))?;
    state.insert("v", Field2D::zeros(Centre, Face, channel.clone()))?;
    for (name, field) in state.iter() {
        println!(
            "  {name}: {:?} samples at {:?}",
            field.shape().as_slice(),
            field.locations().as_slice()
        );
    }

    // A field of the wrong size is rejected.
    if let Err(e) = Field1D::new(Centre, vec![0.0; 5], line) {
        println!("\nrejected: {e}");
    }
    Ok(())
}
