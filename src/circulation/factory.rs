use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::service::CirculationServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub(crate) async fn create_circulation_service(config: &Configuration, store: RepositoryStore,
                                               book_repo: Arc<dyn BookRepository>) -> Arc<dyn CirculationService> {
    let publisher = create_publisher(store.gateway_publisher()).await;
    Arc::new(CirculationServiceImpl::new(config, book_repo, publisher))
}
