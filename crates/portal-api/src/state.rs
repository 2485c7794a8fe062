use std::sync::Arc;

use portal_core::repositories::ContactRepository;
use portal_core::services::ContactService;

#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService<dyn ContactRepository>>,
}

impl AppState {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self {
            contact_service: Arc::new(ContactService::new(contact_repo)),
        }
    }
}
