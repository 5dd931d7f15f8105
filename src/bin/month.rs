//! Prints the current month along with its tasks, as fetched from the configured backend.
//!
//! Set the RUST_LOG environment variable to display more info about what happens.

use std::error::Error;

use chrono::Local;

use month_planner::client::Client;
use month_planner::Session;
use month_planner::utils::{pause, print_month_view};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let client = Client::from_config()?;
    println!("Fetching tasks from {}...", client.url());

    let mut session = Session::new(client, Local::now().date_naive());
    if session.load_initial().await == false {
        log::warn!("Unable to fetch tasks, see the previous log lines for more info. Displaying an empty calendar.");
    }

    print_month_view(&session.view());
    pause();
    session.show_next_month();
    print_month_view(&session.view());

    Ok(())
}
