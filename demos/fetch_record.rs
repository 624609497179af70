//! Fetch one employee record from the HR portal and print it.
//!
//! Usage: cargo run --example fetch_record [ID] [BASE_URL]
//!
//! Defaults: ID 1 against http://localhost:8080

use employee_editor::api::{EmployeeApi, EmployeeGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let id: i64 = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(1);

    let base_url = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    println!("Fetching employee {id} from {base_url}");
    println!("======================================");

    let api = EmployeeApi::new(&base_url, 30);
    let record = api.fetch(id).await?;

    println!("\nName:        {}", record.employee_name.as_deref().unwrap_or("-"));
    println!("Email:       {}", record.email.as_deref().unwrap_or("-"));
    println!("Mobile:      {}", record.mobile_number.as_deref().unwrap_or("-"));
    println!("Department:  {}", record.department.as_deref().unwrap_or("-"));
    println!("Designation: {}", record.designation.as_deref().unwrap_or("-"));
    println!(
        "Salary:      {}",
        record.salary.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("Active:      {}", if record.active != Some(false) { "Yes" } else { "No" });

    Ok(())
}
