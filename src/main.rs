use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_core::{Professional, Registry};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Health service appointment register demonstration")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full demonstration sequence
    Demo,
    /// Show the sample health professionals
    Professionals,
    /// Run the appointment register demonstration
    Appointments {
        /// Print appointments as JSON records instead of detail blocks
        #[arg(long)]
        json: bool,
    },
}

/// Demonstration driver entry point.
///
/// Runs the fixed sequence: sample professionals, dispatch over a mixed
/// professional list, then the appointment register scenario. Each step is
/// guarded so a single failure prints and the rest still runs.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!("starting appointment register demonstration");

    match cli.command {
        Some(Commands::Professionals) => run_professionals()?,
        Some(Commands::Appointments { json }) => run_appointments(json)?,
        Some(Commands::Demo) | None => {
            println!("=== Health Service Appointment System ===");
            run_professionals()?;
            run_appointments(false)?;
            println!("=== Program Completed ===");
        }
    }

    Ok(())
}

/// Builds the sample professionals, prints their detail blocks, and shows
/// dispatch over a mixed list of variants.
fn run_professionals() -> anyhow::Result<()> {
    println!("\n// Health professionals");

    let professionals = sample_professionals()?;
    for professional in &professionals {
        println!("{}", professional.details());
    }

    println!("Polymorphism demonstration:");
    for professional in &professionals {
        println!(
            "Type: {}, Name: {}",
            professional.professional_type(),
            professional.name()
        );
    }

    if let Some(gp) = professionals[0].as_general_practitioner() {
        println!("{}", gp.prescription_authority());
    }
    if let Some(specialist) = professionals[3].as_specialist() {
        println!(
            "Accepts referral for 'urgent heart surgery consult': {}",
            specialist.accepts_referral("urgent heart surgery consult")
        );
    }

    println!("---");
    Ok(())
}

/// Runs the appointment register scenario: create four bookings, list them,
/// cancel one by mobile number, list again.
fn run_appointments(json: bool) -> anyhow::Result<()> {
    println!("\n// Collection of appointments");

    let gp = Arc::new(Professional::general_practitioner(
        101,
        "Dr. Smith",
        Some("General Medicine"),
        true,
        25,
    )?);
    let specialist = Arc::new(Professional::specialist(
        201,
        "Dr. Wilson",
        Some("Cardiology"),
        Some("Heart Surgery"),
        12,
    )?);

    let mut registry = Registry::new();

    let bookings = [
        ("John Doe", "0412345678", "09:00", gp.clone()),
        ("Jane Smith", "0498765432", "10:30", gp),
        ("Mike Johnson", "0432156789", "14:00", specialist.clone()),
        ("Sarah Wilson", "0444555666", "15:30", specialist),
    ];

    for (name, mobile, time, professional) in bookings {
        match registry.create(name, mobile, time, Some(professional)) {
            Ok(()) => println!("Appointment created: {name}"),
            Err(err) => println!("Failed to create appointment: {err}"),
        }
    }

    print_existing_appointments(&registry, json)?;

    match registry.cancel_by_mobile("0498765432") {
        Ok(removed) => println!("Appointment cancelled for: {}", removed.patient_mobile()),
        Err(err) => println!("{err}"),
    }

    print_existing_appointments(&registry, json)?;

    println!("---");
    Ok(())
}

/// Prints the registry contents, or the distinct empty-register message.
fn print_existing_appointments(registry: &Registry, json: bool) -> anyhow::Result<()> {
    if registry.is_empty() {
        println!("No existing appointments.");
        return Ok(());
    }

    if json {
        let records = registry
            .appointments()
            .iter()
            .map(|appointment| appointment.record())
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("Existing appointments ({}):", registry.len());
    for appointment in registry.appointments() {
        match appointment.details() {
            Ok(block) => println!("{block}"),
            Err(err) => println!("Could not display appointment: {err}"),
        }
    }
    Ok(())
}

/// The five sample professionals from the demonstration sequence.
fn sample_professionals() -> anyhow::Result<Vec<Professional>> {
    Ok(vec![
        Professional::general_practitioner(101, "Dr. Smith", Some("General Medicine"), true, 25)?,
        Professional::general_practitioner(102, "Dr. Johnson", Some("Family Medicine"), true, 20)?,
        Professional::general_practitioner(103, "Dr. Brown", Some("Primary Care"), false, 15)?,
        Professional::specialist(
            201,
            "Dr. Wilson",
            Some("Cardiology"),
            Some("Heart Surgery"),
            12,
        )?,
        Professional::specialist(
            202,
            "Dr. Davis",
            Some("Radiology"),
            Some("MRI Diagnosis"),
            8,
        )?,
    ])
}
