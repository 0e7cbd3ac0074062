//! Vehicle facts commands.

use chrono::NaiveDate;
use clap::Subcommand;
use motorlog_core::Vehicle;

use crate::store::Store;
use crate::Ctx;

#[derive(Subcommand)]
pub enum VehicleAction {
    /// Set the vehicle facts
    Set {
        make: String,
        model: String,
        year: i32,
        /// Current odometer reading
        #[arg(long, default_value = "0")]
        mileage: i64,
        /// Purchase date (YYYY-MM-DD)
        #[arg(long)]
        purchased: Option<NaiveDate>,
    },
    /// Show the vehicle facts
    Show,
    /// Update the odometer reading
    Odometer {
        mileage: i64,
    },
}

pub fn run(action: VehicleAction, ctx: &Ctx) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        VehicleAction::Set {
            make,
            model,
            year,
            mileage,
            purchased,
        } => {
            let mut store = Store::load(&ctx.store_path)?;
            let mut vehicle = Vehicle::new(make, model, year).with_mileage(mileage);
            if let Some(date) = purchased {
                vehicle = vehicle.with_purchase_date(date);
            }
            vehicle.validate()?;
            store.vehicle = Some(vehicle);
            store.save(&ctx.store_path)?;
            println!("vehicle saved");
        }
        VehicleAction::Show => {
            let store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?;
            println!("{}", serde_json::to_string_pretty(vehicle)?);
        }
        VehicleAction::Odometer { mileage } => {
            let mut store = Store::load(&ctx.store_path)?;
            let mut vehicle = store.require_vehicle()?.clone();
            vehicle.current_mileage = mileage;
            vehicle.validate()?;
            store.vehicle = Some(vehicle);
            store.save(&ctx.store_path)?;
            println!("odometer updated to {mileage}");
        }
    }
    Ok(())
}
