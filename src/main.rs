use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reorder_sim::io::reporting;
use reorder_sim::io::scenario::ScenarioConfig;
use reorder_sim::{optimize_policy, simulate_inventory, CostTotals, ReorderPolicy, Result};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("=== Reorder Point Simulation ===");

    // 1. LOAD SCENARIO
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("inventory.toml"));
    let scenario = ScenarioConfig::load_or_default(&path)?;
    scenario.validate()?;

    let mut rng = match scenario.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // 2. NAIVE POLICY
    let naive = ReorderPolicy::Scalar(scenario.reorder_point);
    let naive_trace = simulate_inventory(&scenario.simulation, &naive, &mut rng)?;
    let naive_costs = CostTotals::from_trace(&naive_trace, &scenario.costs);
    println!("\n{}", reporting::format_costs("Naive Policy", &naive_costs));

    // 3. LEARN REORDER POINTS
    info!(
        "Running {} Q-learning episodes over {} stock levels",
        scenario.learning.num_episodes, scenario.learning.num_states
    );
    let result = optimize_policy(
        &scenario.costs,
        scenario.reorder_point,
        &scenario.simulation,
        &scenario.learning,
        &mut rng,
    )?;
    println!("\nLearned reorder points by stock level:");
    for (level, reorder_point) in result.policy.iter().enumerate() {
        println!("  stock {:>2}: reorder at {}", level, reorder_point);
    }
    println!("Estimated one-step cost: {:.2} €", result.estimated_cost);

    // 4. OPTIMIZED POLICY
    let optimized = result.into_policy(scenario.reorder_point);
    let optimized_trace = simulate_inventory(&scenario.simulation, &optimized, &mut rng)?;
    let optimized_costs = CostTotals::from_trace(&optimized_trace, &scenario.costs);
    println!("\n{}", reporting::format_costs("Optimized Policy", &optimized_costs));

    // 5. EXPORT RESULTS
    std::fs::create_dir_all(&scenario.output_dir)?;
    reporting::write_trace_file(&scenario.output_dir.join("naive_trace.csv"), &naive_trace)?;
    reporting::write_trace_file(
        &scenario.output_dir.join("optimized_trace.csv"),
        &optimized_trace,
    )?;
    let curve = scenario.simulation.failure.density_curve(10.0, 1000);
    reporting::write_density_file(&scenario.output_dir.join("failure_density.csv"), &curve)?;

    println!("\nSimulation Complete.");
    Ok(())
}
