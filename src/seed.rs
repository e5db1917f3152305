use crate::models::{
    Appointment, AppointmentStatus, ContactInfo, DateRange, Gender, HealthRecord,
    HealthRecordKind, Meetup, Owner, Pet, PetSpecies, Product, ProductCategory, Review,
    ServiceLocation, ServiceProvider, ServiceType, TeamMember, Tutorial, WeightEntry,
    WorkingHours,
};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

// Demo dataset used to seed an empty store. Ids are fixed so commands
// and tests can refer to records straight after a fresh seed.

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn hhmm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid fixture time")
}

pub fn demo_owners() -> Vec<Owner> {
    vec![
        Owner {
            id: "user_owner_01".into(),
            name: "Sarah".into(),
            email: "sarah.j@example.com".into(),
            phone: "555-123-4567".into(),
        },
        Owner {
            id: "user_owner_02".into(),
            name: "Sam Miller".into(),
            email: "sam.m@example.com".into(),
            phone: "555-987-6543".into(),
        },
        Owner {
            id: "user_owner_03".into(),
            name: "Maria Garcia".into(),
            email: "maria.g@example.com".into(),
            phone: "555-111-2222".into(),
        },
    ]
}

pub fn demo_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: "pet_01".into(),
            owner_id: "user_owner_01".into(),
            name: "Buddy".into(),
            species: PetSpecies::Dog,
            breed: "Golden Retriever".into(),
            birth_date: date(2019, 3, 12),
            gender: Gender::Male,
            profile_photo_url: "https://images.example.com/pets/buddy.jpg".into(),
            gallery_photos: vec![],
            microchip_id: Some("985112003456789".into()),
            height_cm: Some(58.0),
            health_records: vec![
                HealthRecord {
                    id: "hr_01".into(),
                    kind: HealthRecordKind::Vaccination,
                    date: date(2023, 6, 15),
                    title: "Rabies Vaccine".into(),
                    details: "3-year booster shot.".into(),
                    next_due_date: Some(date(2026, 6, 15)),
                },
                HealthRecord {
                    id: "hr_02".into(),
                    kind: HealthRecordKind::VetVisit,
                    date: date(2024, 1, 20),
                    title: "Annual Checkup".into(),
                    details: "All clear, healthy weight.".into(),
                    next_due_date: None,
                },
                HealthRecord {
                    id: "hr_03".into(),
                    kind: HealthRecordKind::Allergy,
                    date: date(2022, 5, 10),
                    title: "Pollen".into(),
                    details: "Mild seasonal allergies, sneezing in spring.".into(),
                    next_due_date: None,
                },
            ],
            documents: vec![],
            weight_log: vec![
                WeightEntry { date: date(2023, 7, 1), weight_kg: 35.0 },
                WeightEntry { date: date(2024, 1, 1), weight_kg: 34.5 },
                WeightEntry { date: date(2024, 7, 1), weight_kg: 35.5 },
            ],
            likes: Some("Playing fetch, swimming in the lake, belly rubs".into()),
            dislikes: Some("Thunderstorms, being left alone for too long".into()),
            favorite_food: Some("Peanut butter & kibble mix".into()),
            dietary_notes: Some(
                "2 cups of sensitive stomach formula dry food, twice a day.".into(),
            ),
        },
        Pet {
            id: "pet_02".into(),
            owner_id: "user_owner_01".into(),
            name: "Lucy".into(),
            species: PetSpecies::Cat,
            breed: "Siamese".into(),
            birth_date: date(2021, 9, 4),
            gender: Gender::Female,
            profile_photo_url: "https://images.example.com/pets/lucy.jpg".into(),
            gallery_photos: vec![],
            microchip_id: None,
            height_cm: Some(25.0),
            health_records: vec![],
            documents: vec![],
            weight_log: vec![
                WeightEntry { date: date(2024, 1, 1), weight_kg: 4.7 },
                WeightEntry { date: date(2024, 6, 1), weight_kg: 4.8 },
            ],
            likes: Some("Napping in sunbeams, chasing laser pointers".into()),
            dislikes: Some("Loud noises, vacuum cleaner".into()),
            favorite_food: Some("Tuna-flavored wet food".into()),
            dietary_notes: None,
        },
        Pet {
            id: "pet_03".into(),
            owner_id: "user_owner_02".into(),
            name: "Rocky".into(),
            species: PetSpecies::Dog,
            breed: "German Shepherd".into(),
            birth_date: date(2017, 5, 22),
            gender: Gender::Male,
            profile_photo_url: "https://images.example.com/pets/rocky.jpg".into(),
            gallery_photos: vec![],
            microchip_id: None,
            height_cm: Some(63.0),
            health_records: vec![],
            documents: vec![],
            weight_log: vec![],
            likes: Some("Long runs, learning new tricks".into()),
            dislikes: Some("Strangers approaching too quickly".into()),
            favorite_food: Some("Grilled chicken breast".into()),
            dietary_notes: Some("High-protein diet, 3 cups of large breed formula daily.".into()),
        },
        Pet {
            id: "pet_04".into(),
            owner_id: "user_owner_03".into(),
            name: "Pepper".into(),
            species: PetSpecies::Rabbit,
            breed: "Holland Lop".into(),
            birth_date: date(2022, 2, 14),
            gender: Gender::Female,
            profile_photo_url: "https://images.example.com/pets/pepper.jpg".into(),
            gallery_photos: vec![],
            microchip_id: None,
            height_cm: None,
            health_records: vec![],
            documents: vec![],
            weight_log: vec![],
            likes: Some("Fresh hay, cardboard tunnels".into()),
            dislikes: Some("Being picked up".into()),
            favorite_food: Some("Cilantro".into()),
            dietary_notes: None,
        },
    ]
}

pub fn demo_providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            id: "provider_01".into(),
            name: "Happy Paws Veterinary Clinic".into(),
            service_type: ServiceType::Vet,
            service_location: Some(ServiceLocation::InStore),
            services_offered: vec![
                "Annual Checkup".into(),
                "Vaccination".into(),
                "Dental Cleaning".into(),
            ],
            location: "12 Bark Street".into(),
            contact: ContactInfo {
                phone: "555-201-3040".into(),
                email: "frontdesk@happypaws.example.com".into(),
            },
            rating: 4.8,
            reviews: vec![Review {
                id: "review_01".into(),
                author: "Sam Miller".into(),
                rating: 5.0,
                comment: "Dr. Chen was wonderful with Rocky.".into(),
            }],
            working_hours: WorkingHours { start: hhmm(9, 0), end: hhmm(17, 0) },
            slot_duration_mins: 30,
            about: "Full-service veterinary clinic with an in-house lab.".into(),
            team: vec![TeamMember {
                name: "Dr. Amelia Chen".into(),
                title: "Lead Veterinarian".into(),
                photo_url: "https://images.example.com/team/chen.jpg".into(),
            }],
            gallery: vec![],
            amenities: vec!["Parking".into(), "Wheelchair access".into()],
            business_policies: "24h cancellation notice appreciated.".into(),
        },
        ServiceProvider {
            id: "provider_02".into(),
            name: "The Shiny Coat".into(),
            service_type: ServiceType::Grooming,
            service_location: Some(ServiceLocation::Both),
            services_offered: vec![
                "Full Groom".into(),
                "Bath & Brush".into(),
                "Nail Trim".into(),
            ],
            location: "48 Whisker Lane".into(),
            contact: ContactInfo {
                phone: "555-201-5060".into(),
                email: "hello@shinycoat.example.com".into(),
            },
            rating: 4.6,
            reviews: vec![],
            working_hours: WorkingHours { start: hhmm(10, 0), end: hhmm(18, 0) },
            slot_duration_mins: 45,
            about: "Gentle grooming for dogs and cats of every size.".into(),
            team: vec![],
            gallery: vec![],
            amenities: vec!["Hypoallergenic shampoo".into()],
            business_policies: "Matted coats may take longer than one slot.".into(),
        },
        ServiceProvider {
            id: "provider_03".into(),
            name: "Sunny Tails Daycare".into(),
            service_type: ServiceType::Daycare,
            service_location: Some(ServiceLocation::InStore),
            services_offered: vec!["Full Day Care".into(), "Overnight Boarding".into()],
            location: "7 Meadow Road".into(),
            contact: ContactInfo {
                phone: "555-201-7080".into(),
                email: "stay@sunnytails.example.com".into(),
            },
            rating: 4.9,
            reviews: vec![],
            working_hours: WorkingHours { start: hhmm(7, 30), end: hhmm(19, 0) },
            slot_duration_mins: 30,
            about: "Outdoor play yard, webcams, and nap rooms.".into(),
            team: vec![],
            gallery: vec![],
            amenities: vec!["Webcams".into(), "Outdoor yard".into()],
            business_policies: "Check-in from 09:00, check-out by 17:00.".into(),
        },
        ServiceProvider {
            id: "provider_04".into(),
            name: "Good Dog Academy".into(),
            service_type: ServiceType::Training,
            service_location: Some(ServiceLocation::AtHome),
            services_offered: vec![
                "Puppy Basics".into(),
                "Obedience".into(),
                "Leash Skills".into(),
            ],
            location: "Mobile, serves the whole city".into(),
            contact: ContactInfo {
                phone: "555-201-9010".into(),
                email: "train@gooddog.example.com".into(),
            },
            rating: 4.7,
            reviews: vec![],
            working_hours: WorkingHours { start: hhmm(8, 0), end: hhmm(16, 0) },
            slot_duration_mins: 60,
            about: "Positive-reinforcement training at your home.".into(),
            team: vec![],
            gallery: vec![],
            amenities: vec![],
            business_policies: "Sessions are one hour, owner present.".into(),
        },
    ]
}

pub fn demo_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "appt_seed_01".into(),
            owner_id: "user_owner_01".into(),
            pet_id: "pet_01".into(),
            provider_id: "provider_01".into(),
            service: "Annual Checkup".into(),
            status: AppointmentStatus::Confirmed,
            owner_notes: Some("Buddy gets nervous around other dogs.".into()),
            provider_notes: None,
            date_range: DateRange {
                start: Utc.with_ymd_and_hms(2026, 9, 14, 10, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2026, 9, 14, 10, 30, 0).unwrap(),
            },
        },
        Appointment {
            id: "appt_seed_02".into(),
            owner_id: "user_owner_02".into(),
            pet_id: "pet_03".into(),
            provider_id: "provider_02".into(),
            service: "Full Groom".into(),
            status: AppointmentStatus::Completed,
            owner_notes: None,
            provider_notes: Some("Coat in great shape, next visit in 8 weeks.".into()),
            date_range: DateRange {
                start: Utc.with_ymd_and_hms(2026, 5, 2, 11, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2026, 5, 2, 11, 45, 0).unwrap(),
            },
        },
        Appointment {
            id: "appt_seed_03".into(),
            owner_id: "user_owner_01".into(),
            pet_id: "pet_02".into(),
            provider_id: "provider_01".into(),
            service: "Vaccination".into(),
            status: AppointmentStatus::Cancelled,
            owner_notes: None,
            provider_notes: None,
            date_range: DateRange {
                start: Utc.with_ymd_and_hms(2026, 9, 14, 10, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2026, 9, 14, 10, 30, 0).unwrap(),
            },
        },
    ]
}

pub fn demo_meetups() -> Vec<Meetup> {
    vec![
        Meetup {
            id: "meetup_01".into(),
            organizer_id: "user_owner_01".into(),
            organizer_name: "Sarah".into(),
            title: "Saturday Dog Park Social".into(),
            location: "Riverside Dog Park".into(),
            date: date(2026, 9, 19),
            time: hhmm(10, 0),
            description: "Off-leash play for friendly dogs, all sizes welcome.".into(),
            pet_species: vec![PetSpecies::Dog],
            interested_count: 4,
        },
        Meetup {
            id: "meetup_02".into(),
            organizer_id: "user_owner_03".into(),
            organizer_name: "Maria Garcia".into(),
            title: "Small Pets Picnic".into(),
            location: "Willow Green".into(),
            date: date(2026, 10, 3),
            time: hhmm(14, 0),
            description: "Rabbits, hamsters and birds. Bring a pen!".into(),
            pet_species: vec![PetSpecies::Rabbit, PetSpecies::Hamster, PetSpecies::Bird],
            interested_count: 2,
        },
    ]
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "prod_01".into(),
            name: "Tough Chew Rope Toy".into(),
            description: "Braided cotton rope for heavy chewers.".into(),
            price: 12.99,
            image_url: "https://images.example.com/products/rope.jpg".into(),
            category: ProductCategory::Toys,
        },
        Product {
            id: "prod_02".into(),
            name: "Salmon & Rice Dry Food 10kg".into(),
            description: "Complete nutrition for adult dogs with sensitive stomachs.".into(),
            price: 54.50,
            image_url: "https://images.example.com/products/salmon-food.jpg".into(),
            category: ProductCategory::PetFood,
        },
        Product {
            id: "prod_03".into(),
            name: "Cat Tower Deluxe".into(),
            description: "Three levels, two hideouts, sisal scratching posts.".into(),
            price: 89.00,
            image_url: "https://images.example.com/products/cat-tower.jpg".into(),
            category: ProductCategory::CatSupplies,
        },
        Product {
            id: "prod_04".into(),
            name: "Slicker Brush".into(),
            description: "Removes loose hair and prevents matting.".into(),
            price: 9.75,
            image_url: "https://images.example.com/products/brush.jpg".into(),
            category: ProductCategory::GroomingTools,
        },
        Product {
            id: "prod_05".into(),
            name: "Aquarium Starter Kit 60L".into(),
            description: "Tank, filter, heater and LED lighting.".into(),
            price: 129.99,
            image_url: "https://images.example.com/products/aquarium.jpg".into(),
            category: ProductCategory::FishAquatics,
        },
        Product {
            id: "prod_06".into(),
            name: "Joint Support Chews".into(),
            description: "Glucosamine and omega-3 chews for senior dogs.".into(),
            price: 24.00,
            image_url: "https://images.example.com/products/chews.jpg".into(),
            category: ProductCategory::HealthWellness,
        },
    ]
}

pub fn demo_tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            id: "tut_01".into(),
            category: "Training".into(),
            title: "Teaching a reliable recall".into(),
            content: "Start indoors with high-value treats and a long line...".into(),
        },
        Tutorial {
            id: "tut_02".into(),
            category: "Health".into(),
            title: "Reading your cat's body language".into(),
            content: "A slow blink is relaxed; flattened ears mean back off...".into(),
        },
        Tutorial {
            id: "tut_03".into(),
            category: "Nutrition".into(),
            title: "Switching foods without stomach upset".into(),
            content: "Transition over 7-10 days, increasing the new food gradually...".into(),
        },
    ]
}
