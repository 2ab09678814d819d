use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

pub const GATEWAY: &str = "http://127.0.0.1:3005";

/// Boot the mock gateway once for the whole test binary. The gateway runs on
/// its own runtime thread so it outlives any individual test's runtime.
#[allow(unused)]
pub async fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    let wait = ONCE_LOCK.get().is_none();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
            std::process::exit(1);
        }));

        let _ = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .try_init();

        std::thread::spawn(|| {
            let rt = tokio::runtime::Runtime::new().expect("failed to build gateway runtime");
            rt.block_on(async {
                let addr: SocketAddr = "127.0.0.1:3005".parse().unwrap();
                if let Err(err) = mock_gateway::run(addr).await {
                    error!("Mock gateway exited: {err}");
                }
            });
        });
    });

    if wait {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}
