//! Library host item contract

use crate::{LookupRequest, ResolvedMetadata};

/// Item model owned by the library host.
///
/// The host stores one external id per provider name and exposes the title
/// the item is displayed under.
pub trait HasProviderIds {
    fn provider_id(&self, provider_name: &str) -> Option<&str>;

    fn set_provider_id(&mut self, provider_name: &str, id: &str);

    fn display_title(&self) -> &str;

    /// Build the lookup hints for this item
    fn lookup_request(&self, provider_name: &str) -> LookupRequest {
        LookupRequest {
            known_id: self
                .provider_id(provider_name)
                .filter(|id| !id.trim().is_empty())
                .map(String::from),
            title: self.display_title().to_string(),
        }
    }

    /// Remember the resolved external id so later lookups go straight to it.
    ///
    /// Returns false if the metadata carries no id.
    fn remember_external_id(&mut self, provider_name: &str, metadata: &ResolvedMetadata) -> bool {
        match metadata.external_id.as_deref() {
            Some(id) if metadata.has_data => {
                self.set_provider_id(provider_name, id);
                true
            }
            _ => false,
        }
    }
}
