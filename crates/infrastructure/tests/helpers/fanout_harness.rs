#![allow(dead_code)]
use dnstap_fanout_application::use_cases::{IngestFrameUseCase, ResolveAnswersUseCase};
use dnstap_fanout_domain::{Config, ControlType, DomainError, Fact, Frame};
use dnstap_fanout_infrastructure::dns::HickoryMessageDecoder;
use dnstap_fanout_infrastructure::dnstap::ProstEnvelopeDecoder;
use dnstap_fanout_infrastructure::fanout::{FanoutServer, SubscriberRegistry};
use dnstap_fanout_infrastructure::framestream::{
    encode_control_frame, encode_data_frame, read_frame, DEFAULT_MAX_FRAME_SIZE,
};
use dnstap_fanout_infrastructure::lookup_wire::read_fact;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UnixStream};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const WAIT_LIMIT: Duration = Duration::from_secs(5);

/// A running fan-out server on a temporary Unix socket and an ephemeral port.
pub struct FanoutHarness {
    pub server: Arc<FanoutServer>,
    pub shutdown: CancellationToken,
    pub handle: JoinHandle<()>,
    pub socket_path: PathBuf,
    _dir: TempDir,
}

impl FanoutHarness {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(customize: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("dnstap.sock");

        let mut config = Config::default();
        config.ingest.socket_path = socket_path;
        config.distribution.bind_address = "127.0.0.1".to_string();
        config.distribution.port = 0;
        customize(&mut config);
        let socket_path = config.ingest.socket_path.clone();

        let server = Arc::new(bind_server(&config).await.unwrap());
        let shutdown = CancellationToken::new();

        let running = server.clone();
        let token = shutdown.clone();
        let handle = tokio::spawn(async move {
            running.run(token).await.unwrap();
        });

        Self {
            server,
            shutdown,
            handle,
            socket_path,
            _dir: dir,
        }
    }

    pub async fn subscribe(&self) -> TcpStream {
        TcpStream::connect(self.server.distribution_addr())
            .await
            .unwrap()
    }

    /// Connects `n` subscribers and waits until the server has registered all of them.
    pub async fn subscribe_many(&self, n: usize) -> Vec<TcpStream> {
        let mut subscribers = Vec::with_capacity(n);
        for _ in 0..n {
            subscribers.push(self.subscribe().await);
        }
        let server = self.server.clone();
        wait_until(move || server.subscriber_count() >= n).await;
        subscribers
    }

    pub async fn producer(&self) -> Producer {
        Producer {
            stream: UnixStream::connect(&self.socket_path).await.unwrap(),
        }
    }

    pub async fn stop(self) {
        self.shutdown.cancel();
        tokio::time::timeout(WAIT_LIMIT, self.handle)
            .await
            .expect("server did not stop")
            .unwrap();
    }
}

/// Binds a server wired to the real decoders, without running it.
pub async fn bind_server(config: &Config) -> Result<FanoutServer, DomainError> {
    let registry = Arc::new(SubscriberRegistry::new());
    let resolver = Arc::new(ResolveAnswersUseCase::new(Arc::new(HickoryMessageDecoder)));
    let ingest = Arc::new(IngestFrameUseCase::new(
        Arc::new(ProstEnvelopeDecoder),
        resolver,
        registry.clone(),
    ));
    FanoutServer::bind(config, registry, ingest).await
}

/// Frame Streams producer side of an ingest connection.
pub struct Producer {
    pub stream: UnixStream,
}

impl Producer {
    pub async fn send_control(&mut self, kind: ControlType) {
        self.stream
            .write_all(&encode_control_frame(kind))
            .await
            .unwrap();
    }

    pub async fn send_data(&mut self, payload: &[u8]) {
        self.stream
            .write_all(&encode_data_frame(payload))
            .await
            .unwrap();
    }

    pub async fn expect_control(&mut self, kind: ControlType) {
        let frame = tokio::time::timeout(
            WAIT_LIMIT,
            read_frame(&mut self.stream, DEFAULT_MAX_FRAME_SIZE),
        )
        .await
        .expect("no control frame from server")
        .unwrap();
        assert_eq!(frame, Frame::Control(kind));
    }

    /// Waits for the server to close the connection, asserting it sent nothing first.
    pub async fn expect_closed(&mut self) {
        let mut buf = [0u8; 16];
        let read = tokio::time::timeout(WAIT_LIMIT, self.stream.read(&mut buf))
            .await
            .expect("server kept the connection open");
        match read {
            Ok(n) => assert_eq!(n, 0, "unexpected bytes before close: {:?}", &buf[..n]),
            Err(e) => assert_eq!(e.kind(), std::io::ErrorKind::ConnectionReset),
        }
    }
}

pub async fn read_facts(stream: &mut TcpStream, n: usize) -> Vec<Fact> {
    let mut facts = Vec::with_capacity(n);
    for _ in 0..n {
        let fact = tokio::time::timeout(WAIT_LIMIT, read_fact(stream))
            .await
            .expect("timed out waiting for fact")
            .unwrap();
        facts.push(fact);
    }
    facts
}

pub async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(WAIT_LIMIT, async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}
