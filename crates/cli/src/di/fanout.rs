use dnstap_fanout_application::use_cases::{IngestFrameUseCase, ResolveAnswersUseCase};
use dnstap_fanout_domain::{Config, DomainError};
use dnstap_fanout_infrastructure::dns::HickoryMessageDecoder;
use dnstap_fanout_infrastructure::dnstap::ProstEnvelopeDecoder;
use dnstap_fanout_infrastructure::fanout::{FanoutServer, SubscriberRegistry};
use std::sync::Arc;

pub struct FanoutServices {
    pub registry: Arc<SubscriberRegistry>,
    pub ingest: Arc<IngestFrameUseCase>,
}

impl FanoutServices {
    pub fn new() -> Self {
        let registry = Arc::new(SubscriberRegistry::new());
        let resolver = Arc::new(ResolveAnswersUseCase::new(Arc::new(
            HickoryMessageDecoder::new(),
        )));
        let ingest = Arc::new(IngestFrameUseCase::new(
            Arc::new(ProstEnvelopeDecoder::new()),
            resolver,
            registry.clone(),
        ));

        Self { registry, ingest }
    }

    pub async fn bind_server(&self, config: &Config) -> Result<FanoutServer, DomainError> {
        FanoutServer::bind(config, self.registry.clone(), self.ingest.clone()).await
    }
}

impl Default for FanoutServices {
    fn default() -> Self {
        Self::new()
    }
}
