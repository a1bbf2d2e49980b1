//! Domain command handler

use super::{load_store, save_store};
use cgpa_planner::config::Config;
use cgpa_planner::info;
use cgpa_planner::models::Domain;
use cgpa_planner::store::Category;

/// Show the active domain, or switch to another one
pub fn run(domain: Option<Domain>, config: &Config) {
    let mut store = load_store(config);

    let Some(domain) = domain else {
        let active = store.domain();
        println!("Active domain: {active} ({})", active.program_name());
        for other in Domain::ALL {
            let data = store.data_for(other);
            let recorded: usize = Category::ALL
                .iter()
                .map(|&c| data.get(c).valid_entries().len())
                .sum();
            let marker = if other == active { "*" } else { " " };
            println!("  {marker} {other}  {:<40} {recorded} subjects", other.program_name());
        }
        return;
    };

    if domain == store.domain() {
        println!("✓ Already using {domain} ({})", domain.program_name());
        return;
    }

    store.switch_domain(domain);
    save_store(&store, config);
    info!("Active domain set to {domain}");
    println!("✓ Switched to {domain} ({})", domain.program_name());
}
