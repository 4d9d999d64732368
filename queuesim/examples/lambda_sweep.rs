//! Sweep the arrival rate of the three studied stations and compare with theory.
//!
//! ```bash
//! cargo run -p queuesim --example lambda_sweep
//! RUST_LOG=queuesim_components=debug cargo run -p queuesim --example lambda_sweep
//! ```

use queuesim::metrics::export::export_csv;
use queuesim::metrics::theory;
use queuesim::prelude::*;

const SERVICE_RATE: f64 = 1.0;
const CUSTOMERS: u64 = 100_000;
const REPLICATIONS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_simulation_logging();

    let studies: [(&str, StationConfig); 3] = [
        ("mm1", StationConfig::mm1(0.5, SERVICE_RATE, CUSTOMERS)),
        (
            "mg1",
            StationConfig::mg1_hyperexponential(0.5, SERVICE_RATE, CUSTOMERS),
        ),
        (
            "gm1",
            StationConfig::gm1_hyperexponential(0.5, SERVICE_RATE, CUSTOMERS),
        ),
    ];

    for (name, template) in studies {
        let points = sweep_arrival_rates(&template, &STUDY_ARRIVAL_RATES, REPLICATIONS)?;

        println!("== {name}");
        println!("{:>6} {:>16} {:>9} {:>9}", "lambda", "sim Wq", "theory Wq", "rho");
        for point in &points {
            let expected = match name {
                "mm1" => theory::mm1(point.lambda, SERVICE_RATE)?,
                "mg1" => theory::mg1_pollaczek_khinchine(point.lambda, SERVICE_RATE, 4.0)?,
                _ => theory::gm1_hyperexponential(point.lambda, SERVICE_RATE, 9.0)?,
            };
            println!(
                "{:>6.1} {:>9.4}±{:<6.4} {:>9.4} {:>9.4}",
                point.lambda,
                point.result.avg_wait_time,
                point.result.wait_time_margin,
                expected.avg_wait_time,
                point.result.avg_utilization
            );
        }

        let path = std::env::temp_dir().join(format!("queuesim_{name}_sweep.csv"));
        export_csv(&points, &path)?;
        println!("results written to {}", path.display());
    }

    Ok(())
}
