use std::error::Error;
use vpc_subnet_planner::config::{OutputFormat, PlannerConfig};
use vpc_subnet_planner::output::{plan_print, plan_to_json};
use vpc_subnet_planner::{get_available_zones, plan_vpc};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = PlannerConfig::from_env()?;
    let available = get_available_zones(&config)?;
    let plan = plan_vpc(&config, &available)?;

    match config.output {
        OutputFormat::Table => plan_print(&plan),
        OutputFormat::Json => println!("{}", plan_to_json(&plan)?),
    }

    log::info!("#End main()");
    Ok(())
}
