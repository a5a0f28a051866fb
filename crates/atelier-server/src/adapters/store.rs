//! Demo Profile Store
//!
//! In-memory fixture implementation of the ProfileStore port: the ten VIP
//! records and the show calendar, built once at startup and never written.

use chrono::NaiveDate;

use atelier::{ClientProfile, GalleryEvent, ProfileStore};

pub struct DemoProfileStore {
    clients: Vec<ClientProfile>,
    events: Vec<GalleryEvent>,
}

impl DemoProfileStore {
    pub fn new() -> Self {
        Self {
            clients: demo_clients(),
            events: demo_events(),
        }
    }
}

impl Default for DemoProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for DemoProfileStore {
    fn clients(&self) -> &[ClientProfile] {
        &self.clients
    }

    fn events(&self) -> &[GalleryEvent] {
        &self.events
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: u32,
    name: &str,
    purchase_history: &str,
    interaction_history: &str,
    preferred_contact_times: &str,
    last_contact: NaiveDate,
    sentiment_baseline: f64,
) -> ClientProfile {
    ClientProfile {
        id,
        name: name.to_string(),
        purchase_history: purchase_history.to_string(),
        interaction_history: interaction_history.to_string(),
        preferred_contact_times: preferred_contact_times.to_string(),
        last_contact,
        sentiment_baseline,
    }
}

fn demo_clients() -> Vec<ClientProfile> {
    vec![
        profile(
            1,
            "Alice Smith",
            "Contemporary Art, Sculptures",
            "Attended Art Basel Miami 2022",
            "Weekdays, Afternoon",
            date(2023, 9, 15),
            0.8,
        ),
        profile(
            2,
            "Bob Johnson",
            "Modern Art, Installations",
            "VIP Lounge Visit in Basel 2021",
            "Weekends, Morning",
            date(2023, 9, 10),
            0.6,
        ),
        profile(
            3,
            "Carol Williams",
            "Abstract Paintings, Digital Art",
            "Missed last event due to scheduling",
            "Weekdays, Evening",
            date(2023, 9, 5),
            0.4,
        ),
        profile(
            4,
            "David Brown",
            "Impressionist Paintings, Photography",
            "Regular attendee since 2015",
            "Weekends, Afternoon",
            date(2023, 9, 1),
            0.9,
        ),
        profile(
            5,
            "Eva Davis",
            "Sculptures, Mixed Media",
            "Hosted private gallery tour in 2019",
            "Weekdays, Morning",
            date(2023, 8, 28),
            0.7,
        ),
        profile(
            6,
            "Frank Miller",
            "Street Art, Graffiti Art",
            "Attended online exhibitions during 2020",
            "Weekends, Evening",
            date(2023, 8, 25),
            0.5,
        ),
        profile(
            7,
            "Grace Wilson",
            "Classical Paintings, Antique Artifacts",
            "Special guest at Art Basel Hong Kong 2018",
            "Weekdays, Afternoon",
            date(2023, 8, 20),
            0.85,
        ),
        profile(
            8,
            "Henry Moore",
            "Pop Art, Limited Edition Prints",
            "Participated in collector's panel discussion",
            "Weekdays, Morning",
            date(2023, 8, 15),
            0.65,
        ),
        profile(
            9,
            "Isabella Taylor",
            "Kinetic Art, Interactive Installations",
            "Sponsored young artists program in 2021",
            "Weekends, Afternoon",
            date(2023, 8, 10),
            0.75,
        ),
        profile(
            10,
            "Jack Anderson",
            "Video Art, Virtual Reality Art",
            "Expressed interest in emerging digital art",
            "Weekdays, Evening",
            date(2023, 8, 5),
            0.95,
        ),
    ]
}

fn demo_events() -> Vec<GalleryEvent> {
    vec![
        GalleryEvent {
            name: "Art Basel Miami Beach".to_string(),
            date: date(2023, 12, 8),
        },
        GalleryEvent {
            name: "Art Basel Hong Kong".to_string(),
            date: date(2024, 3, 28),
        },
        GalleryEvent {
            name: "Art Basel in Basel".to_string(),
            date: date(2024, 6, 13),
        },
        GalleryEvent {
            name: "Art Basel Paris".to_string(),
            date: date(2024, 10, 18),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_holds_ten_clients_with_unique_ids() {
        let store = DemoProfileStore::new();
        assert_eq!(store.clients().len(), 10);

        let mut ids: Vec<u32> = store.clients().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn baselines_stay_in_unit_range() {
        let store = DemoProfileStore::new();
        for client in store.clients() {
            assert!(
                (0.0..=1.0).contains(&client.sentiment_baseline),
                "{} has baseline {}",
                client.name,
                client.sentiment_baseline
            );
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let store = DemoProfileStore::new();
        assert_eq!(store.find_client(1).unwrap().name, "Alice Smith");
        assert!(store.find_client(42).is_none());
    }

    #[test]
    fn events_are_in_date_order() {
        let store = DemoProfileStore::new();
        assert!(!store.events().is_empty());
        for pair in store.events().windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }
}
