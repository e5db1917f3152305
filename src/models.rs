use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetSpecies {
    Dog,
    Cat,
    Rabbit,
    Bird,
    Fish,
    Hamster,
    Other,
}

impl FromStr for PetSpecies {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(PetSpecies::Dog),
            "cat" => Ok(PetSpecies::Cat),
            "rabbit" => Ok(PetSpecies::Rabbit),
            "bird" => Ok(PetSpecies::Bird),
            "fish" => Ok(PetSpecies::Fish),
            "hamster" => Ok(PetSpecies::Hamster),
            "other" => Ok(PetSpecies::Other),
            _ => Err(format!("Unknown species: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthRecordKind {
    Vaccination,
    VetVisit,
    Medication,
    Allergy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthRecord {
    pub id: String,
    pub kind: HealthRecordKind,
    pub date: NaiveDate,
    pub title: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PetDocument {
    pub id: String,
    pub name: String,
    pub upload_date: NaiveDate,
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pet {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub species: PetSpecies,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub profile_photo_url: String,
    pub gallery_photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microchip_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    pub health_records: Vec<HealthRecord>,
    pub documents: Vec<PetDocument>,
    pub weight_log: Vec<WeightEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dislikes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_food: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_notes: Option<String>,
}

impl Pet {
    /// Whole years since the pet's birth date.
    pub fn age_years(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Vet,
    Grooming,
    Daycare,
    Training,
    Spa,
}

impl ServiceType {
    /// Daycare bookings span a date range; every other type occupies a
    /// single fixed-duration slot on one day.
    pub fn is_slot_based(&self) -> bool {
        !matches!(self, ServiceType::Daycare)
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vet" => Ok(ServiceType::Vet),
            "grooming" => Ok(ServiceType::Grooming),
            "daycare" => Ok(ServiceType::Daycare),
            "training" => Ok(ServiceType::Training),
            "spa" => Ok(ServiceType::Spa),
            _ => Err(format!("Unknown service type: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLocation {
    InStore,
    AtHome,
    Both,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
    pub photo_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: f64,
    pub comment: String,
}

/// Daily open/close window within which slots are enumerated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub service_type: ServiceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_location: Option<ServiceLocation>,
    pub services_offered: Vec<String>,
    pub location: String,
    pub contact: ContactInfo,
    pub rating: f64,
    pub reviews: Vec<Review>,
    pub working_hours: WorkingHours,
    pub slot_duration_mins: i64,
    pub about: String,
    pub team: Vec<TeamMember>,
    pub gallery: Vec<String>,
    pub amenities: Vec<String>,
    pub business_policies: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Declined,
}

impl AppointmentStatus {
    /// An appointment in a blocking status occupies its time slot.
    pub fn is_blocking(&self) -> bool {
        !matches!(
            self,
            AppointmentStatus::Cancelled | AppointmentStatus::Declined
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Declined => "Declined",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "declined" => Ok(AppointmentStatus::Declined),
            _ => Err(format!("Unknown appointment status: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Appointment {
    pub id: String,
    pub owner_id: String,
    pub pet_id: String,
    pub provider_id: String,
    pub service: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_notes: Option<String>,
    pub date_range: DateRange,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Meetup {
    pub id: String,
    pub organizer_id: String,
    pub organizer_name: String,
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub pet_species: Vec<PetSpecies>,
    pub interested_count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Tutorial {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    DogSupplies,
    CatSupplies,
    FishAquatics,
    SmallAnimals,
    PetFood,
    Toys,
    GroomingTools,
    HealthWellness,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: ProductCategory,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientProviderLink {
    pub provider_id: String,
    pub owner_id: String,
}
