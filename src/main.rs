mod assistant;
mod booking;
mod config;
mod error;
mod logger;
mod models;
mod registry;
mod report;
mod seed;
mod stats;
mod storage;
mod utils;

use anyhow::{anyhow, Result};
use assistant::Assistant;
use booking::{BookingRequest, Schedule};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fd_lock::RwLock;
use models::{AppointmentStatus, Gender, Meetup, Pet, PetSpecies};
use report::Reporter;
use std::fs::OpenOptions;
use std::str::FromStr;
use storage::Store;
use utils::{format_hhmm, parse_hhmm};

#[derive(Parser)]
#[command(name = "pawhub")]
#[command(about = "Manage pets, service providers and appointment bookings", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage pets
    Pets {
        #[command(subcommand)]
        command: PetCommands,
    },
    /// Browse service providers
    Providers {
        #[command(subcommand)]
        command: ProviderCommands,
    },
    /// Show open booking slots for a provider on a day
    Slots {
        /// Provider id
        #[arg(short, long)]
        provider: String,
        /// Target day (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
    },
    /// Book an appointment
    Book {
        /// Pet id
        #[arg(long)]
        pet: String,
        /// Provider id
        #[arg(long)]
        provider: String,
        /// Service name, as offered by the provider
        #[arg(long)]
        service: String,
        /// Day of a slot booking (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Start time of a slot booking (HH:MM)
        #[arg(long)]
        time: Option<String>,
        /// First day of a daycare stay (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Last day of a daycare stay (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// Note for the provider
        #[arg(long)]
        notes: Option<String>,
    },
    /// List and update appointments
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommands,
    },
    /// Community meetups
    Meetups {
        #[command(subcommand)]
        command: MeetupCommands,
    },
    /// Browse the product catalog
    Products,
    /// Browse care tutorials
    Tutorials,
    /// Manage a provider's client list
    Clients {
        #[command(subcommand)]
        command: ClientCommands,
    },
    /// Print a per-provider booking report
    Report,
    /// Ask the AI assistant
    Assistant {
        #[command(subcommand)]
        command: AssistantCommands,
    },
    /// Wipe local data and reseed the demo fixtures
    Reset,
}

#[derive(Subcommand)]
enum PetCommands {
    /// List pets of the current owner
    List,
    /// Register a new pet
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        species: PetSpecies,
        #[arg(long)]
        breed: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        photo_url: Option<String>,
    },
    /// Remove a pet and its appointments
    Remove {
        pet_id: String,
    },
}

#[derive(Subcommand)]
enum ProviderCommands {
    List,
    /// Show one provider in full
    Show {
        provider_id: String,
    },
}

#[derive(Subcommand)]
enum AppointmentCommands {
    /// List appointments for the current owner, or for a provider
    List {
        #[arg(long)]
        provider: Option<String>,
    },
    /// Change the status of an appointment
    SetStatus {
        appointment_id: String,
        /// Pending, Confirmed, Completed, Cancelled or Declined
        status: String,
    },
}

#[derive(Subcommand)]
enum MeetupCommands {
    List,
    /// Organize a meetup
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: String,
        /// Meetup day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Meetup time (HH:MM)
        #[arg(long)]
        time: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Welcome species, repeatable
        #[arg(long = "species")]
        species: Vec<PetSpecies>,
    },
    /// Mark or withdraw interest in a meetup
    Interest {
        meetup_id: String,
        /// Withdraw instead of joining
        #[arg(long)]
        leave: bool,
    },
}

#[derive(Subcommand)]
enum ClientCommands {
    /// Owners who booked with the provider, plus manual additions
    List {
        #[arg(long)]
        provider: String,
    },
    /// Manually add an owner to a provider's client list
    Add {
        #[arg(long)]
        provider: String,
        #[arg(long)]
        owner: String,
    },
}

#[derive(Subcommand)]
enum AssistantCommands {
    /// Generate a personalized care plan for a pet
    CarePlan {
        pet_id: String,
    },
    /// Triage reported symptoms for a pet
    Triage {
        pet_id: String,
        symptoms: String,
    },
    /// Ask a free-form pet-care question
    Ask {
        query: String,
    },
}

fn mutates(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Book { .. }
            | Commands::Reset
            | Commands::Pets {
                command: PetCommands::Add { .. } | PetCommands::Remove { .. },
            }
            | Commands::Appointments {
                command: AppointmentCommands::SetStatus { .. },
            }
            | Commands::Meetups {
                command: MeetupCommands::Add { .. } | MeetupCommands::Interest { .. },
            }
            | Commands::Clients {
                command: ClientCommands::Add { .. },
            }
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let base_dir = Store::base_dir()?;
    let config = config::load_config(&base_dir)?;
    let store = Store::from_dir(base_dir.clone());

    // Mutating commands hold an exclusive lock on the data directory so
    // whole invocations are serialized against each other.
    let mut lock = None;
    if mutates(&cli.command) {
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(base_dir.join("pawhub.lock"))?;
        lock = Some(RwLock::new(lock_file));
    }
    let _guard = match lock.as_mut() {
        Some(lock) => Some(lock.try_write().map_err(|_| {
            anyhow!("Another PawHub command is already running. Please wait for it to finish.")
        })?),
        None => None,
    };

    let mut registry = store.load_registry()?;

    match cli.command {
        Commands::Pets { command } => match command {
            PetCommands::List => {
                let owner_id = &config.default_owner_id;
                for pet in registry.pets.iter().filter(|p| &p.owner_id == owner_id) {
                    println!(
                        "{}  {} ({:?}, {}), born {}",
                        pet.id, pet.name, pet.species, pet.breed, pet.birth_date
                    );
                }
            }
            PetCommands::Add {
                name,
                species,
                breed,
                birth_date,
                gender,
                photo_url,
            } => {
                let id = registry.add_pet(Pet {
                    id: String::new(),
                    owner_id: config.default_owner_id.clone(),
                    name,
                    species,
                    breed,
                    birth_date,
                    gender,
                    profile_photo_url: photo_url.unwrap_or_default(),
                    gallery_photos: vec![],
                    microchip_id: None,
                    height_cm: None,
                    health_records: vec![],
                    documents: vec![],
                    weight_log: vec![],
                    likes: None,
                    dislikes: None,
                    favorite_food: None,
                    dietary_notes: None,
                });
                store.save_registry(&registry)?;
                println!("Added pet {}", id);
            }
            PetCommands::Remove { pet_id } => {
                registry.remove_pet(&pet_id)?;
                store.save_registry(&registry)?;
                println!("Removed pet {} and its appointments", pet_id);
            }
        },
        Commands::Providers { command } => match command {
            ProviderCommands::List => {
                for provider in &registry.providers {
                    println!(
                        "{}  {} ({:?}) {}-{}, {} min slots, rated {:.1}",
                        provider.id,
                        provider.name,
                        provider.service_type,
                        format_hhmm(provider.working_hours.start),
                        format_hhmm(provider.working_hours.end),
                        provider.slot_duration_mins,
                        provider.rating
                    );
                }
            }
            ProviderCommands::Show { provider_id } => {
                let provider = registry
                    .provider(&provider_id)
                    .ok_or_else(|| anyhow!("No provider with id {}", provider_id))?;
                println!("{} ({:?})", provider.name, provider.service_type);
                println!("  {}", provider.about);
                println!("  Location: {}", provider.location);
                println!(
                    "  Hours: {}-{} ({} min slots)",
                    format_hhmm(provider.working_hours.start),
                    format_hhmm(provider.working_hours.end),
                    provider.slot_duration_mins
                );
                println!("  Services: {}", provider.services_offered.join(", "));
                println!(
                    "  Contact: {} / {}",
                    provider.contact.phone, provider.contact.email
                );
                if !provider.amenities.is_empty() {
                    println!("  Amenities: {}", provider.amenities.join(", "));
                }
            }
        },
        Commands::Slots { provider, date } => {
            let provider = registry
                .provider(&provider)
                .ok_or_else(|| anyhow!("No provider with id {}", provider))?;
            let open: Vec<String> = booking::available_slots(provider, &registry.appointments, date)?
                .map(format_hhmm)
                .collect();
            if open.is_empty() {
                println!("No available slots on {}. Please try another date.", date);
            } else {
                println!("Available slots at {} on {}:", provider.name, date);
                println!("  {}", open.join("  "));
            }
        }
        Commands::Book {
            pet,
            provider,
            service,
            date,
            time,
            start_date,
            end_date,
            notes,
        } => {
            let provider_record = registry
                .provider(&provider)
                .ok_or_else(|| anyhow!("No provider with id {}", provider))?
                .clone();
            if registry.pet(&pet).is_none() {
                return Err(anyhow!("No pet with id {}", pet));
            }

            let schedule = if provider_record.service_type.is_slot_based() {
                let date = date.ok_or_else(|| anyhow!("Please select a date and time slot."))?;
                let time = time.ok_or_else(|| anyhow!("Please select a date and time slot."))?;
                Schedule::Slot {
                    date,
                    time: parse_hhmm(&time)?,
                }
            } else {
                let start_date =
                    start_date.ok_or_else(|| anyhow!("Please select a start date."))?;
                Schedule::Range {
                    start_date,
                    end_date,
                }
            };

            let request = BookingRequest {
                owner_id: config.default_owner_id.clone(),
                pet_id: pet,
                provider_id: provider,
                service,
                owner_notes: notes,
                schedule,
            };
            let appointment = booking::build_appointment(&provider_record, &request)?;
            let id = appointment.id.clone();
            registry.add_appointment(appointment);
            store.save_registry(&registry)?;
            println!("Booked {} at {}", id, provider_record.name);
        }
        Commands::Appointments { command } => match command {
            AppointmentCommands::List { provider } => {
                let appointments = match provider {
                    Some(provider_id) => registry.appointments_for_provider(&provider_id),
                    None => registry.appointments_for_owner(&config.default_owner_id),
                };
                for a in appointments {
                    let pet_name = registry.pet(&a.pet_id).map(|p| p.name.as_str()).unwrap_or("?");
                    let provider_name = registry
                        .provider(&a.provider_id)
                        .map(|p| p.name.as_str())
                        .unwrap_or("?");
                    println!(
                        "{}  {}  {} for {} at {} [{}]",
                        a.id,
                        a.date_range.start.format("%Y-%m-%d %H:%M"),
                        a.service,
                        pet_name,
                        provider_name,
                        a.status.as_str()
                    );
                }
            }
            AppointmentCommands::SetStatus {
                appointment_id,
                status,
            } => {
                let status = AppointmentStatus::from_str(&status).map_err(|e| anyhow!(e))?;
                registry.set_appointment_status(&appointment_id, status)?;
                store.save_registry(&registry)?;
                println!("{} is now {}", appointment_id, status.as_str());
            }
        },
        Commands::Meetups { command } => match command {
            MeetupCommands::List => {
                for meetup in &registry.meetups {
                    println!(
                        "{}  {} at {} on {} {} ({} interested)",
                        meetup.id,
                        meetup.title,
                        meetup.location,
                        meetup.date,
                        format_hhmm(meetup.time),
                        meetup.interested_count
                    );
                }
            }
            MeetupCommands::Add {
                title,
                location,
                date,
                time,
                description,
                species,
            } => {
                let organizer_name = registry
                    .owner(&config.default_owner_id)
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| "You".to_string());
                let id = registry.add_meetup(Meetup {
                    id: String::new(),
                    organizer_id: config.default_owner_id.clone(),
                    organizer_name,
                    title,
                    location,
                    date,
                    time: parse_hhmm(&time)?,
                    description,
                    pet_species: species,
                    interested_count: 0,
                });
                store.save_registry(&registry)?;
                println!("Organized meetup {}", id);
            }
            MeetupCommands::Interest { meetup_id, leave } => {
                registry.set_meetup_interest(&meetup_id, !leave)?;
                store.save_registry(&registry)?;
                if let Some(meetup) = registry.meetups.iter().find(|m| m.id == meetup_id) {
                    println!(
                        "{} now has {} interested",
                        meetup.title, meetup.interested_count
                    );
                }
            }
        },
        Commands::Products => {
            for product in &registry.products {
                println!(
                    "{}  {}  ${:.2} ({:?})",
                    product.id, product.name, product.price, product.category
                );
            }
        }
        Commands::Tutorials => {
            for tutorial in &registry.tutorials {
                println!("{}  [{}] {}", tutorial.id, tutorial.category, tutorial.title);
                println!("    {}", tutorial.content);
            }
        }
        Commands::Clients { command } => match command {
            ClientCommands::List { provider } => {
                if registry.provider(&provider).is_none() {
                    return Err(anyhow!("No provider with id {}", provider));
                }
                for owner in registry.clients_of(&provider) {
                    println!("{}  {} ({}, {})", owner.id, owner.name, owner.email, owner.phone);
                }
            }
            ClientCommands::Add { provider, owner } => {
                if registry.provider(&provider).is_none() {
                    return Err(anyhow!("No provider with id {}", provider));
                }
                if registry.owner(&owner).is_none() {
                    return Err(anyhow!("No owner with id {}", owner));
                }
                registry.link_client(&provider, &owner);
                store.save_registry(&registry)?;
                println!("Added {} to the client list of {}", owner, provider);
            }
        },
        Commands::Report => {
            Reporter::new(&registry).report(Utc::now());
        }
        Commands::Assistant { command } => {
            let assistant = Assistant::from_env();
            match command {
                AssistantCommands::CarePlan { pet_id } => {
                    let pet = registry
                        .pet(&pet_id)
                        .ok_or_else(|| anyhow!("No pet with id {}", pet_id))?;
                    println!("{}", assistant.care_plan(pet).await);
                }
                AssistantCommands::Triage { pet_id, symptoms } => {
                    let pet = registry
                        .pet(&pet_id)
                        .ok_or_else(|| anyhow!("No pet with id {}", pet_id))?;
                    println!("{}", assistant.symptom_triage(pet, &symptoms).await);
                }
                AssistantCommands::Ask { query } => {
                    let answer = assistant.resource_info(&query).await;
                    println!("{}", answer.text);
                    if !answer.sources.is_empty() {
                        println!("\nSources:");
                        for source in answer.sources {
                            println!("  {} ({})", source.title, source.uri);
                        }
                    }
                }
            }
        }
        Commands::Reset => {
            store.reset()?;
            store.load_registry()?;
            println!("Local data wiped and reseeded from the demo fixtures.");
        }
    }

    Ok(())
}
