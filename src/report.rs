use crate::registry::Registry;
use crate::stats::calculate_stats;
use chrono::{DateTime, Utc};

pub struct Reporter<'a> {
    registry: &'a Registry,
}

impl<'a> Reporter<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Print a per-provider booking summary.
    pub fn report(&self, now: DateTime<Utc>) {
        if self.registry.appointments.is_empty() {
            println!("No appointments recorded yet.");
            return;
        }

        println!("PawHub Booking Report");
        println!("=====================");

        for provider in &self.registry.providers {
            let appointments: Vec<_> = self
                .registry
                .appointments_for_provider(&provider.id)
                .into_iter()
                .cloned()
                .collect();
            if appointments.is_empty() {
                continue;
            }

            let stats = calculate_stats(&appointments, now);

            println!("\n{} ({:?})", provider.name, provider.service_type);
            println!("  Upcoming:   {}", stats.upcoming);
            println!("  Past:       {}", stats.past);
            println!(
                "  By status:  {} pending, {} confirmed, {} completed, {} cancelled, {} declined",
                stats.totals.pending,
                stats.totals.confirmed,
                stats.totals.completed,
                stats.totals.cancelled,
                stats.totals.declined
            );
            if let Some((date, count)) = stats.busiest_day() {
                println!("  Busiest day: {} ({} bookings)", date, count);
            }
        }

        let overall = calculate_stats(&self.registry.appointments, now);
        println!("\nOverall");
        println!("-------");
        println!("Total appointments:  {}", self.registry.appointments.len());
        println!("Upcoming bookings:   {}", overall.upcoming);
        println!(
            "Cancelled/declined:  {}",
            overall.totals.cancelled + overall.totals.declined
        );
    }
}
