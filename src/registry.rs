use crate::error::{AppError, Result};
use crate::models::{
    Appointment, AppointmentStatus, ClientProviderLink, Meetup, Owner, Pet, Product,
    ServiceProvider, Tutorial,
};
use crate::utils::new_id;
use tracing::debug;

/// All entity collections, held as plain vectors and mutated in place.
/// Callers own the registry, mutate it through these methods and persist
/// the result themselves; nothing here touches storage.
#[derive(Debug, Default)]
pub struct Registry {
    pub owners: Vec<Owner>,
    pub pets: Vec<Pet>,
    pub providers: Vec<ServiceProvider>,
    pub appointments: Vec<Appointment>,
    pub meetups: Vec<Meetup>,
    pub products: Vec<Product>,
    pub tutorials: Vec<Tutorial>,
    pub client_links: Vec<ClientProviderLink>,
}

impl Registry {
    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn provider(&self, id: &str) -> Option<&ServiceProvider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn owner(&self, id: &str) -> Option<&Owner> {
        self.owners.iter().find(|o| o.id == id)
    }

    /// Appointments for one owner, newest start first.
    pub fn appointments_for_owner(&self, owner_id: &str) -> Vec<&Appointment> {
        let mut found: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .collect();
        found.sort_by(|a, b| b.date_range.start.cmp(&a.date_range.start));
        found
    }

    /// Appointments for one provider, newest start first.
    pub fn appointments_for_provider(&self, provider_id: &str) -> Vec<&Appointment> {
        let mut found: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.provider_id == provider_id)
            .collect();
        found.sort_by(|a, b| b.date_range.start.cmp(&a.date_range.start));
        found
    }

    /// Append a booked appointment. Newest bookings go to the front.
    /// No slot-collision check happens here: two appointments built from
    /// the same availability snapshot are both accepted as-is.
    pub fn add_appointment(&mut self, appointment: Appointment) {
        debug!(id = %appointment.id, provider = %appointment.provider_id, "appointment added");
        self.appointments.insert(0, appointment);
    }

    /// Replace the status of one appointment. Any status may move to any
    /// other status.
    pub fn set_appointment_status(&mut self, id: &str, status: AppointmentStatus) -> Result<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Appointment {}", id)))?;
        debug!(id, from = appointment.status.as_str(), to = status.as_str(), "status changed");
        appointment.status = status;
        Ok(())
    }

    /// Register a pet with a fresh id and empty history. The profile
    /// photo, when present, seeds the gallery.
    pub fn add_pet(&mut self, mut pet: Pet) -> String {
        pet.id = new_id("pet");
        pet.health_records = Vec::new();
        pet.documents = Vec::new();
        pet.weight_log = Vec::new();
        pet.gallery_photos = if pet.profile_photo_url.is_empty() {
            Vec::new()
        } else {
            vec![pet.profile_photo_url.clone()]
        };
        let id = pet.id.clone();
        self.pets.push(pet);
        id
    }

    pub fn update_pet(&mut self, updated: Pet) -> Result<()> {
        let pet = self
            .pets
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Pet {}", updated.id)))?;
        *pet = updated;
        Ok(())
    }

    /// Remove a pet together with every appointment booked for it.
    pub fn remove_pet(&mut self, pet_id: &str) -> Result<()> {
        if self.pet(pet_id).is_none() {
            return Err(AppError::NotFound(format!("Pet {}", pet_id)));
        }
        self.appointments.retain(|a| a.pet_id != pet_id);
        self.pets.retain(|p| p.id != pet_id);
        Ok(())
    }

    pub fn add_owner(&mut self, mut owner: Owner) -> String {
        owner.id = new_id("owner");
        let id = owner.id.clone();
        self.owners.push(owner);
        id
    }

    pub fn update_owner(&mut self, updated: Owner) -> Result<()> {
        let owner = self
            .owners
            .iter_mut()
            .find(|o| o.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Owner {}", updated.id)))?;
        *owner = updated;
        Ok(())
    }

    /// Register a provider with a fresh id. Rating, reviews, team and
    /// gallery start empty and accrue later.
    pub fn add_provider(&mut self, mut provider: ServiceProvider) -> String {
        provider.id = new_id("provider");
        provider.rating = 0.0;
        provider.reviews = Vec::new();
        provider.team = Vec::new();
        provider.gallery = Vec::new();
        let id = provider.id.clone();
        self.providers.push(provider);
        id
    }

    pub fn update_provider(&mut self, updated: ServiceProvider) -> Result<()> {
        let provider = self
            .providers
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Provider {}", updated.id)))?;
        *provider = updated;
        Ok(())
    }

    /// Publish a meetup. The organizer counts as interested.
    pub fn add_meetup(&mut self, mut meetup: Meetup) -> String {
        meetup.id = new_id("meetup");
        meetup.interested_count = 1;
        let id = meetup.id.clone();
        self.meetups.insert(0, meetup);
        id
    }

    pub fn update_meetup(&mut self, updated: Meetup) -> Result<()> {
        let meetup = self
            .meetups
            .iter_mut()
            .find(|m| m.id == updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Meetup {}", updated.id)))?;
        *meetup = updated;
        Ok(())
    }

    pub fn delete_meetup(&mut self, meetup_id: &str) -> Result<()> {
        let before = self.meetups.len();
        self.meetups.retain(|m| m.id != meetup_id);
        if self.meetups.len() == before {
            return Err(AppError::NotFound(format!("Meetup {}", meetup_id)));
        }
        Ok(())
    }

    /// Toggle interest in a meetup: `interested` reflects the caller's
    /// new state, so joining bumps the count and leaving drops it.
    pub fn set_meetup_interest(&mut self, meetup_id: &str, interested: bool) -> Result<()> {
        let meetup = self
            .meetups
            .iter_mut()
            .find(|m| m.id == meetup_id)
            .ok_or_else(|| AppError::NotFound(format!("Meetup {}", meetup_id)))?;
        if interested {
            meetup.interested_count += 1;
        } else {
            meetup.interested_count = meetup.interested_count.saturating_sub(1);
        }
        Ok(())
    }

    /// Manually attach an owner to a provider's client list. Adding the
    /// same pair twice is a no-op.
    pub fn link_client(&mut self, provider_id: &str, owner_id: &str) {
        let exists = self
            .client_links
            .iter()
            .any(|l| l.provider_id == provider_id && l.owner_id == owner_id);
        if exists {
            return;
        }
        self.client_links.push(ClientProviderLink {
            provider_id: provider_id.to_string(),
            owner_id: owner_id.to_string(),
        });
    }

    /// Owners who have ever booked with the provider, plus manually
    /// linked ones, deduped in first-seen order.
    pub fn clients_of(&self, provider_id: &str) -> Vec<&Owner> {
        let mut seen: Vec<&str> = Vec::new();
        for a in &self.appointments {
            if a.provider_id == provider_id && !seen.contains(&a.owner_id.as_str()) {
                seen.push(&a.owner_id);
            }
        }
        for l in &self.client_links {
            if l.provider_id == provider_id && !seen.contains(&l.owner_id.as_str()) {
                seen.push(&l.owner_id);
            }
        }
        seen.iter().filter_map(|id| self.owner(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{available_slots, build_appointment, BookingRequest, Schedule};
    use crate::models::{
        ContactInfo, DateRange, Gender, PetSpecies, ServiceType, WorkingHours,
    };
    use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};

    fn test_registry() -> Registry {
        let mut registry = Registry::default();
        registry.owners.push(Owner {
            id: "user_owner_01".into(),
            name: "Sarah".into(),
            email: "sarah@example.com".into(),
            phone: "555-123-4567".into(),
        });
        registry.pets.push(Pet {
            id: "pet_01".into(),
            owner_id: "user_owner_01".into(),
            name: "Buddy".into(),
            species: PetSpecies::Dog,
            breed: "Golden Retriever".into(),
            birth_date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            gender: Gender::Male,
            profile_photo_url: String::new(),
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
        registry.providers.push(ServiceProvider {
            id: "provider_01".into(),
            name: "Happy Paws Vet".into(),
            service_type: ServiceType::Vet,
            service_location: None,
            services_offered: vec!["Checkup".into()],
            location: "12 Bark Street".into(),
            contact: ContactInfo {
                phone: "555-0000".into(),
                email: "hello@happypaws.test".into(),
            },
            rating: 4.5,
            reviews: vec![],
            working_hours: WorkingHours {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            },
            slot_duration_mins: 30,
            about: String::new(),
            team: vec![],
            gallery: vec![],
            amenities: vec![],
            business_policies: String::new(),
        });
        registry
    }

    fn appointment_at(id: &str, pet_id: &str, h: u32, m: u32) -> Appointment {
        let start = Utc.with_ymd_and_hms(2024, 7, 1, h, m, 0).unwrap();
        Appointment {
            id: id.into(),
            owner_id: "user_owner_01".into(),
            pet_id: pet_id.into(),
            provider_id: "provider_01".into(),
            service: "Checkup".into(),
            status: AppointmentStatus::Confirmed,
            owner_notes: None,
            provider_notes: None,
            date_range: DateRange {
                start,
                end: start + Duration::minutes(30),
            },
        }
    }

    #[test]
    fn test_appointments_sorted_newest_first() {
        let mut registry = test_registry();
        registry.add_appointment(appointment_at("appt_a", "pet_01", 9, 0));
        registry.add_appointment(appointment_at("appt_b", "pet_01", 14, 0));
        registry.add_appointment(appointment_at("appt_c", "pet_01", 11, 0));

        let for_provider = registry.appointments_for_provider("provider_01");
        let ids: Vec<&str> = for_provider.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["appt_b", "appt_c", "appt_a"]);

        let for_owner = registry.appointments_for_owner("user_owner_01");
        assert_eq!(for_owner.len(), 3);
    }

    #[test]
    fn test_set_appointment_status() {
        let mut registry = test_registry();
        registry.add_appointment(appointment_at("appt_a", "pet_01", 9, 0));

        registry
            .set_appointment_status("appt_a", AppointmentStatus::Completed)
            .unwrap();
        assert_eq!(
            registry.appointments[0].status,
            AppointmentStatus::Completed
        );

        // Transitions are unrestricted, even out of a terminal status.
        registry
            .set_appointment_status("appt_a", AppointmentStatus::Pending)
            .unwrap();
        assert_eq!(registry.appointments[0].status, AppointmentStatus::Pending);

        let err = registry
            .set_appointment_status("appt_missing", AppointmentStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_remove_pet_cascades_appointments() {
        let mut registry = test_registry();
        registry.add_appointment(appointment_at("appt_a", "pet_01", 9, 0));
        registry.add_appointment(appointment_at("appt_b", "pet_02", 10, 0));

        registry.remove_pet("pet_01").unwrap();

        assert!(registry.pet("pet_01").is_none());
        let remaining: Vec<&str> = registry
            .appointments
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(remaining, vec!["appt_b"]);
    }

    #[test]
    fn test_add_pet_resets_history() {
        let mut registry = test_registry();
        let mut pet = registry.pets[0].clone();
        pet.name = "Lucy".into();
        pet.profile_photo_url = "https://example.com/lucy.jpg".into();

        let id = registry.add_pet(pet);
        let added = registry.pet(&id).unwrap();
        assert!(added.id.starts_with("pet_"));
        assert!(added.health_records.is_empty());
        assert_eq!(added.gallery_photos, vec!["https://example.com/lucy.jpg"]);
    }

    #[test]
    fn test_add_provider_resets_reputation() {
        let mut registry = test_registry();
        let mut provider = registry.providers[0].clone();
        provider.rating = 5.0;

        let id = registry.add_provider(provider);
        let added = registry.provider(&id).unwrap();
        assert_eq!(added.rating, 0.0);
        assert!(added.reviews.is_empty());
    }

    #[test]
    fn test_whole_record_updates_replace_in_place() {
        let mut registry = test_registry();

        let mut pet = registry.pets[0].clone();
        pet.name = "Buddy Jr.".into();
        registry.update_pet(pet).unwrap();
        assert_eq!(registry.pet("pet_01").unwrap().name, "Buddy Jr.");

        let mut owner = registry.owners[0].clone();
        owner.phone = "555-000-1111".into();
        registry.update_owner(owner).unwrap();
        assert_eq!(registry.owner("user_owner_01").unwrap().phone, "555-000-1111");

        let mut provider = registry.providers[0].clone();
        provider.slot_duration_mins = 20;
        registry.update_provider(provider).unwrap();
        assert_eq!(
            registry.provider("provider_01").unwrap().slot_duration_mins,
            20
        );

        let mut stray = registry.pets[0].clone();
        stray.id = "pet_unknown".into();
        assert!(matches!(
            registry.update_pet(stray),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_meetup_update_and_delete() {
        let mut registry = test_registry();
        let id = registry.add_meetup(Meetup {
            id: String::new(),
            organizer_id: "user_owner_01".into(),
            organizer_name: "Sarah".into(),
            title: "Dog park morning".into(),
            location: "Riverside Park".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            description: String::new(),
            pet_species: vec![PetSpecies::Dog],
            interested_count: 1,
        });

        let mut updated = registry.meetups[0].clone();
        updated.location = "Willow Green".into();
        registry.update_meetup(updated).unwrap();
        assert_eq!(registry.meetups[0].location, "Willow Green");

        registry.delete_meetup(&id).unwrap();
        assert!(registry.meetups.is_empty());
        assert!(matches!(
            registry.delete_meetup(&id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_meetup_interest_bookkeeping() {
        let mut registry = test_registry();
        let id = registry.add_meetup(Meetup {
            id: String::new(),
            organizer_id: "user_owner_01".into(),
            organizer_name: "Sarah".into(),
            title: "Dog park morning".into(),
            location: "Riverside Park".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            description: String::new(),
            pet_species: vec![PetSpecies::Dog],
            interested_count: 99,
        });

        assert_eq!(registry.meetups[0].interested_count, 1);

        registry.set_meetup_interest(&id, true).unwrap();
        assert_eq!(registry.meetups[0].interested_count, 2);

        registry.set_meetup_interest(&id, false).unwrap();
        registry.set_meetup_interest(&id, false).unwrap();
        registry.set_meetup_interest(&id, false).unwrap();
        // Never underflows.
        assert_eq!(registry.meetups[0].interested_count, 0);
    }

    #[test]
    fn test_link_client_dedup_and_listing() {
        let mut registry = test_registry();
        registry.owners.push(Owner {
            id: "user_owner_02".into(),
            name: "Sam Miller".into(),
            email: "sam.m@example.com".into(),
            phone: "555-987-6543".into(),
        });
        registry.add_appointment(appointment_at("appt_a", "pet_01", 9, 0));

        registry.link_client("provider_01", "user_owner_02");
        registry.link_client("provider_01", "user_owner_02");
        // Linking an owner who already booked changes nothing either.
        registry.link_client("provider_01", "user_owner_01");
        assert_eq!(registry.client_links.len(), 2);

        let clients: Vec<&str> = registry
            .clients_of("provider_01")
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(clients, vec!["user_owner_01", "user_owner_02"]);
    }

    /// Characterizes inherited behavior: availability is computed once,
    /// then two bookings built from that same snapshot both go through.
    /// Nothing re-validates the slot at append time.
    #[test]
    fn test_double_booking_from_stale_snapshot_succeeds() {
        let mut registry = test_registry();
        let provider = registry.provider("provider_01").unwrap().clone();
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let open: Vec<NaiveTime> = available_slots(&provider, &registry.appointments, date)
            .unwrap()
            .collect();
        let slot = open[2];

        let request = BookingRequest {
            owner_id: "user_owner_01".into(),
            pet_id: "pet_01".into(),
            provider_id: provider.id.clone(),
            service: "Checkup".into(),
            owner_notes: None,
            schedule: Schedule::Slot { date, time: slot },
        };

        let first = build_appointment(&provider, &request).unwrap();
        let second = build_appointment(&provider, &request).unwrap();
        registry.add_appointment(first);
        registry.add_appointment(second);

        let same_slot = registry
            .appointments
            .iter()
            .filter(|a| a.date_range.start.time() == slot && a.status.is_blocking())
            .count();
        assert_eq!(same_slot, 2);

        // The slot only disappears from availability afterwards.
        let open_after: Vec<NaiveTime> =
            available_slots(&provider, &registry.appointments, date)
                .unwrap()
                .collect();
        assert!(!open_after.contains(&slot));
    }

    #[test]
    fn test_failed_booking_leaves_registry_untouched() {
        let mut registry = test_registry();
        let provider = registry.provider("provider_01").unwrap().clone();

        let request = BookingRequest {
            owner_id: "user_owner_01".into(),
            pet_id: "pet_01".into(),
            provider_id: String::new(),
            service: "Checkup".into(),
            owner_notes: None,
            schedule: Schedule::Slot {
                date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            },
        };

        assert!(build_appointment(&provider, &request).is_err());
        assert!(registry.appointments.is_empty());
    }
}
