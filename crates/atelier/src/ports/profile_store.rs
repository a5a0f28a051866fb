//! Profile Store Port
//!
//! Read-only access to the fixed client and event records. The demo data is
//! loaded once at startup and never changes, so the contract is pure and
//! infallible: lookups either hit or miss.

use crate::domain::{ClientProfile, GalleryEvent};

pub trait ProfileStore: Send + Sync {
    /// All client records, in stable store order
    fn clients(&self) -> &[ClientProfile];

    /// All upcoming events, in date order
    fn events(&self) -> &[GalleryEvent];

    /// Look up a client by its stable identifier
    fn find_client(&self, id: u32) -> Option<&ClientProfile> {
        self.clients().iter().find(|c| c.id == id)
    }
}
